//! Application Layer
//!
//! Use cases and application services.

pub mod admin;
pub mod caller;
pub mod config;
pub mod login;
pub mod signup;

use crate::domain::repository::StoreMode;

/// Suffix telling demo users their write went nowhere.
const DEMO_NOTICE: &str = " (demo mode - nothing was stored)";

/// Tag an acknowledgement with the demo notice when writes are not durable.
pub(crate) fn ack(message: &str, mode: StoreMode) -> String {
    match mode {
        StoreMode::Durable => message.to_string(),
        StoreMode::Demo => format!("{message}{DEMO_NOTICE}"),
    }
}

// Re-exports
pub use admin::{AdminAccountManager, AdminCreateInput, SetActiveInput};
pub use caller::Caller;
pub use config::IdentityConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use signup::{SignupInput, SignupOutput, SignupUseCase};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_appends_notice_only_in_demo_mode() {
        assert_eq!(ack("Account created.", StoreMode::Durable), "Account created.");
        assert_eq!(
            ack("Account created.", StoreMode::Demo),
            "Account created. (demo mode - nothing was stored)"
        );
    }
}
