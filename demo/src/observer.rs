use std::{cell::RefCell, rc::Rc};

use log::debug;
use signals::SubscriptionId;

use crate::{config::Variant, subject::Subject};

type Transcript = Rc<RefCell<Vec<String>>>;

#[derive(Debug, Clone, Copy)]
struct Handles {
    int_primary: SubscriptionId,
    int_secondary: SubscriptionId,
    text: SubscriptionId,
}

/// Prints every event it receives and keeps a transcript of the lines.
#[derive(Debug)]
pub struct Observer {
    transcript: Transcript,
    handles: Option<Handles>,
}

impl Observer {
    pub fn attach(subject: &Subject, variant: Variant) -> Self {
        let transcript = Transcript::default();
        let handles = match variant {
            Variant::Connect => {
                subject
                    .int_signal
                    .connect(print_slot(&transcript, |value, _| {
                        format!("Integer value is {value}")
                    }));
                subject
                    .text_signal
                    .connect(text_slot(&transcript));
                None
            }
            Variant::Handles => Some(Handles {
                int_primary: subject
                    .int_signal
                    .subscribe(print_slot(&transcript, |value, companion| {
                        format!("Integer value is {value} {companion}")
                    })),
                int_secondary: subject
                    .int_signal
                    .subscribe(print_slot(&transcript, |value, companion| {
                        format!("Integer second slot is {value} {companion}")
                    })),
                text: subject.text_signal.subscribe(text_slot(&transcript)),
            }),
        };
        debug!("Observer attached ({variant}) with {handles:?}");
        Observer {
            transcript,
            handles,
        }
    }

    /// Removes the first integer slot. Calling it again changes nothing.
    pub fn detach(&self, subject: &Subject) {
        if let Some(handles) = self.handles {
            subject.int_signal.unsubscribe(handles.int_primary);
            debug!(
                "Observer keeps {} and {}",
                handles.int_secondary, handles.text
            );
        }
    }

    pub fn transcript(&self) -> Vec<String> {
        self.transcript.borrow().clone()
    }
}

fn print_slot<F>(transcript: &Transcript, format: F) -> impl Fn(i32, i32) + 'static
where
    F: Fn(i32, i32) -> String + 'static,
{
    let transcript = Rc::clone(transcript);
    move |value: i32, companion: i32| {
        let line = format(value, companion);
        println!("{line}");
        transcript.borrow_mut().push(line);
    }
}

fn text_slot(transcript: &Transcript) -> impl Fn(String) + 'static {
    let transcript = Rc::clone(transcript);
    move |text: String| {
        let line = format!("String value is {text}");
        println!("{line}");
        transcript.borrow_mut().push(line);
    }
}
