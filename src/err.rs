use std::process::{ExitCode, Termination};
use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub(crate) enum SqErr {
    #[error("[Stage] Op `{op}` failed on element `{element}`: {reason}")]
    StageFailed { op: &'static str, element: String, reason: String },

    #[error("[Scenario] Unknown scenario `{name}`, see `-h` for the available list")]
    UnknownScenario { name: String },
}

impl Termination for SqErr {
    fn report(self) -> ExitCode {
        eprintln!("{}", self);
        ExitCode::from(self.exit_code())
    }
}

impl SqErr {
    pub fn termination(self) -> ! {
        let exit_code = self.exit_code();
        self.report();
        std::process::exit(exit_code as i32);
    }

    fn exit_code(&self) -> u8 {
        match self {
            SqErr::StageFailed { .. } => 1,
            SqErr::UnknownScenario { .. } => 2,
        }
    }
}
