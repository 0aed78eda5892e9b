pub mod commands;
pub mod csr;
pub mod execute;
pub mod extra_fields;
pub mod operation;
pub mod output;
pub mod params;
pub mod types;

pub use execute::{ExecutionSettings, VaasNode};
pub use operation::{NodeOperation, Resource};
pub use output::{BinaryData, OperationResult, OutputItem};
pub use params::{ItemParameters, ParameterError};
