/// Game payload and response shapes.
pub mod game;
/// Health check response shape.
pub mod health;
/// Validation helpers shared by DTOs.
pub mod validation;
