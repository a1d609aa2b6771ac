use std::rc::Rc;

use log::{info, warn};

use crate::booking::fields::{BookingFields, BookingRequest};
use crate::booking::links::{email_body, email_subject, mailto_link, whatsapp_link, whatsapp_text};
use crate::config::SiteConfig;
use crate::device::DeviceClass;
use crate::error::BookingError;

pub const FOLLOW_UP_PROMPT: &str = "Also send email?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    Open(String),
    /// Ask first, open only on yes.
    ConfirmThenOpen { prompt: String, url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchStep {
    /// Milliseconds after submission.
    pub delay_ms: u32,
    pub action: LinkAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchPlan {
    pub device: DeviceClass,
    pub steps: Vec<DispatchStep>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Warning(String),
    Success(String),
}

pub trait LinkOpener {
    /// Opens `url` in a new tab or the registered handler. False when the
    /// browser refused (e.g. popup blocked).
    fn open(&self, url: &str) -> bool;
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
    fn confirm(&self, prompt: &str) -> bool;
}

pub trait Scheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

pub fn success_message(device: DeviceClass) -> &'static str {
    match device {
        DeviceClass::Mobile => "Thank you! WhatsApp is opening with your booking request.",
        DeviceClass::Desktop => "Thank you! Your booking request will be sent.",
    }
}

pub fn plan_dispatch(
    req: &BookingRequest,
    device: DeviceClass,
    config: &SiteConfig,
) -> Result<DispatchPlan, BookingError> {
    let subject = email_subject(req);
    let body = email_body(req);
    let chat = whatsapp_link(&config.whatsapp_number, &whatsapp_text(req));

    let steps = match device {
        DeviceClass::Mobile => {
            let mut steps = vec![DispatchStep { delay_ms: 0, action: LinkAction::Open(chat) }];
            if let Some(recipient) = config.primary_recipient() {
                steps.push(DispatchStep {
                    delay_ms: config.follow_up_delay_ms,
                    action: LinkAction::ConfirmThenOpen {
                        prompt: FOLLOW_UP_PROMPT.to_string(),
                        url: mailto_link(recipient, &subject, &body),
                    },
                });
            }
            steps
        }
        DeviceClass::Desktop => {
            if config.recipients.is_empty() {
                return Err(BookingError::NoRecipients);
            }
            let mut steps: Vec<DispatchStep> = config
                .recipients
                .iter()
                .zip(0u32..)
                .map(|(recipient, i)| DispatchStep {
                    delay_ms: i.saturating_mul(config.mail_stagger_ms),
                    action: LinkAction::Open(mailto_link(recipient, &subject, &body)),
                })
                .collect();
            let last_mail = steps.last().map_or(0, |step| step.delay_ms);
            steps.push(DispatchStep {
                delay_ms: last_mail.saturating_add(config.chat_delay_ms),
                action: LinkAction::Open(chat),
            });
            steps
        }
    };

    Ok(DispatchPlan { device, steps })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub device: DeviceClass,
    pub scheduled: usize,
}

/// Turns booking form submissions into external mail/chat links.
pub struct BookingDesk {
    config: SiteConfig,
    opener: Rc<dyn LinkOpener>,
    notifier: Rc<dyn Notifier>,
    scheduler: Rc<dyn Scheduler>,
}

impl BookingDesk {
    pub fn new(
        config: SiteConfig,
        opener: Rc<dyn LinkOpener>,
        notifier: Rc<dyn Notifier>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self { config, opener, notifier, scheduler }
    }

    /// Validates and dispatches one submission. On error exactly one warning
    /// is shown and nothing is opened; the caller keeps the form as typed.
    /// On success the caller clears the form.
    pub fn submit(&self, fields: &BookingFields, device: DeviceClass) -> Result<SubmissionReceipt, BookingError> {
        let plan = match fields.validate().and_then(|req| plan_dispatch(&req, device, &self.config)) {
            Ok(plan) => plan,
            Err(e) => {
                info!("Booking rejected: {:?}", e);
                self.notifier.notify(Notice::Warning(e.to_string()));
                return Err(e);
            }
        };

        let scheduled = plan.steps.len();
        for step in plan.steps {
            self.schedule(step);
        }

        self.notifier.notify(Notice::Success(success_message(device).to_string()));
        info!("Booking dispatched on {:?} path, {} link(s) scheduled", device, scheduled);
        Ok(SubmissionReceipt { device, scheduled })
    }

    fn schedule(&self, step: DispatchStep) {
        let opener = self.opener.clone();
        let notifier = self.notifier.clone();
        let task = move || run_step(&*opener, &*notifier, step.action);
        if step.delay_ms == 0 {
            task();
        } else {
            self.scheduler.after(step.delay_ms, Box::new(task));
        }
    }
}

fn run_step(opener: &dyn LinkOpener, notifier: &dyn Notifier, action: LinkAction) {
    let url = match action {
        LinkAction::Open(url) => url,
        LinkAction::ConfirmThenOpen { prompt, url } => {
            if !notifier.confirm(&prompt) {
                return;
            }
            url
        }
    };
    if !opener.open(&url) {
        warn!("Browser did not open {}", url.split('?').next().unwrap_or_default());
    }
}
