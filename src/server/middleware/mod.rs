//! Request guards applied by controllers before touching the service layer.

pub mod auth;

#[cfg(test)]
mod test;
