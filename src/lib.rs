// Topic Atlas: tooling around a hierarchical topic-model map pipeline.
//
// This is the library root. Each module corresponds to one stage of the
// pipeline: splitting the full model into partitions, driving the external
// layout tools, and reshaping their outputs.

pub mod cli;
pub mod config;
pub mod data;
pub mod extract;
pub mod labels;
pub mod logging;
pub mod tools;
