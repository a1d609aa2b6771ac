use yew::prelude::*;

use crate::effects::REVEAL_CLASS;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Element id; the reveal observer keys on it.
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    html! {
        <div id={props.id.clone()} class={classes!(REVEAL_CLASS, props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
