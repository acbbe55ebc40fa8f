//! Workflow glue between the command line and the library

pub mod orchestration;

pub use orchestration::{
    process_request, run_workflow, run_workflow_with, RepoReport, WorkflowOptions,
};
