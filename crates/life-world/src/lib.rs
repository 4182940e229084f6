//! Conway's Game of Life on a fixed, hard-edged grid.
//!
//! A [`World`] owns a `width x height` grid of [`Cell`]s and advances it one
//! generation at a time with [`World::rotate`]. Drivers (renderers,
//! interactive shells) construct a world, read cells back through
//! [`World::cells`] or [`World::board`], edit them with [`World::kill`] and
//! [`World::revive`], and rotate again.
//!
//! ```
//! use life_world::{World, pattern::BLINKER};
//!
//! let mut world = World::genesis(5, 5)?;
//! world.clear();
//! world.place(&BLINKER, 1, 1)?;
//!
//! let transition = world.rotate();
//! assert_eq!(transition.population, 3);
//! assert!(world.get(2, 3)?.is_alive());
//! # Ok::<(), life_world::WorldError>(())
//! ```

mod cell;
mod direction;
mod error;
pub mod pattern;
mod rule;
mod seed;
mod world;

pub use cell::{Cell, CellState};
pub use direction::Direction;
pub use error::{WorldError, WorldResult};
pub use pattern::Pattern;
pub use rule::{Fate, Rule};
pub use seed::Seed;
pub use world::{Neighbours, Transition, World};
