//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Message, User) for testing purposes. These factories create valid Serenity
//! objects by deserializing JSON, simulating what Discord's gateway would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{message::create_test_message, user::create_test_user};
//!
//! let author = create_test_user(42, "listener");
//! let message = create_test_message(100, 200, 42, "check this out");
//! assert_eq!(message.author.id.get(), 42);
//! ```
//!
//! # Available Factories
//!
//! - `message::create_test_message` - Create Serenity Message objects
//! - `user::create_test_user` - Create Serenity User objects

pub mod message;
pub mod user;

// Re-export commonly used functions for convenience
pub use message::create_test_message;
pub use user::create_test_user;
