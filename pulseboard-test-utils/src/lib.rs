pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        fixtures::profile::{data, factory},
        test_setup_with_report_tables, test_setup_with_tables, TestError, TestSetup,
    };
}
