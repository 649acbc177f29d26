//! Cross-cutting helpers shared by components and providers.

pub mod cookies;
