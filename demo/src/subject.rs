use log::info;
use signals::Event;

/// Owns two independent signals and raises them on demand.
#[derive(Debug, Default)]
pub struct Subject {
    pub int_signal: Event<(i32, i32)>,
    pub text_signal: Event<(String,)>,
}

impl Subject {
    pub fn raise_int(&self, value: i32, companion: i32) {
        info!("Raising integer event ({value}, {companion})");
        self.int_signal.fire((value, companion));
    }

    pub fn raise_text(&self, text: &str) {
        info!("Raising string event {text:?}");
        self.text_signal.fire((text.to_string(),));
    }
}
