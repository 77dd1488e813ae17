//! Interactive 3D atom model: nucleon packing on a Fibonacci lattice,
//! electron shells under the 2n² rule, and per-frame orbital animation.
//!
//! Rendering is the caller's job. A frame loop constructs an [`AtomModel`],
//! calls [`AtomModel::update`] (or [`AtomModel::arrange_electrons_2d`] for
//! the static 2D arrangement) once per frame, and reads positions back.

pub mod constants;
pub mod error;
pub mod physics;
pub mod simulation;

pub use error::AtomError;
pub use physics::elements::Element;
pub use physics::nucleus::{Nucleon, NucleonKind, NucleusPacking};
pub use physics::orbit::Electron;
pub use simulation::atom::{AtomModel, LayoutMode};
