//! Payroll Engine
//!
//! This crate computes monthly payroll breakdowns under Tunisian rules: an
//! hourly rate derived from the base salary, overtime pay, the employee CNSS
//! social-security contribution, progressive annual IRPP income tax, and net
//! salary. It also generates payroll records for a workforce from attended hours.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod generation;
pub mod models;
