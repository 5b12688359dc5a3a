//! Collaborator implementations that run entirely in memory.

pub mod in_memory;
