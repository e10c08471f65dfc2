pub const CONFIRMATION_FINAL_STEP: u8 = 3;

const CONFIRMATION_PROMPTS: [&str; CONFIRMATION_FINAL_STEP as usize] = [
    "aur bhi kuch h👉👈",
    "pkkaaa naa??",
    "ek baar aur soch lo !",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ConfirmationStep(u8);

impl ConfirmationStep {
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_final(self) -> bool {
        self.0 >= CONFIRMATION_FINAL_STEP
    }

    /// Label for the button shown at this step, `None` once terminal.
    pub fn prompt(self) -> Option<&'static str> {
        CONFIRMATION_PROMPTS.get(self.0 as usize).copied()
    }

    pub(crate) fn advance(&mut self) -> bool {
        if self.is_final() {
            return false;
        }
        self.0 += 1;
        true
    }
}
