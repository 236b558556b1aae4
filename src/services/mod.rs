// Service module exports

pub mod resolver;
