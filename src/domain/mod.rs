// Domain layer: labels, ticket text and result types. No I/O here.

pub mod model;
