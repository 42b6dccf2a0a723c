//! Embassy tasks

pub mod dispatcher;
pub mod sensor;
pub mod trigger;

pub use dispatcher::dispatcher_task;
pub use sensor::sensor_task;
pub use trigger::trigger_task;
