//! Scape Core Types and Definitions
//!
//! This crate provides the graph model behind Scape documents. It includes:
//!
//! - **Identifiers**: Store-assigned numeric ids ([`identifier`] module)
//! - **Elements**: Nodes, edges, and compound parent links ([`element`] module)
//! - **Scapes**: Named graphs with presentation settings ([`scape`] module)
//! - **Storage**: The [`store::ElementStore`] repository and its in-memory implementation
//! - **Errors**: Model errors shared by the whole workspace ([`error`] module)

pub mod element;
pub mod error;
pub mod identifier;
pub mod scape;
pub mod store;
