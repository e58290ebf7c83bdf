//! Domain Layer
//!
//! Selection and catalog logic for the console, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Fixed catalogs (test suites, deployable images)
//! - `value_objects/` - Immutable value types (TestFilter, Verbosity, ImageSet)
//! - `services/` - Pure selection services (filter resolution, image selection)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or touches the file system
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All external effects go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
