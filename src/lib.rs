//! Declarative layouts for positioning and sizing widgets.
//!
//! Widgets describe their geometry with [`Layout`] expressions: constants,
//! percentages of the parent's size, and sums of both. `"50% - 10"` is half of
//! the parent's extent minus ten.
//!
//! ```rust
//! use relayout::figures::Size;
//! use relayout::{Container, Geometry, Layout2d, Transformable};
//!
//! #[derive(Debug)]
//! struct Button {
//!     geometry: Geometry,
//! }
//!
//! impl Transformable for Button {
//!     fn geometry(&self) -> &Geometry {
//!         &self.geometry
//!     }
//!
//!     fn geometry_mut(&mut self) -> &mut Geometry {
//!         &mut self.geometry
//!     }
//! }
//!
//! let mut window = Container::new((800, 600));
//! let button = window.push(Button {
//!     geometry: Geometry::new(
//!         Layout2d::parse("50% - 50", "10").unwrap(),
//!         Layout2d::parse("100", "5%").unwrap(),
//!     ),
//! });
//!
//! let button = window.get(button).unwrap();
//! assert_eq!(button.position().x, 350.);
//! assert_eq!(button.size(), Size::new(100., 30.));
//! ```
//!
//! Layouts are not re-evaluated on their own. A [`Container`] pushes its size
//! to its children whenever its own size changes; custom parents must call
//! [`Transformable::parent_resized()`] the same way.
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

mod container;
pub mod layout;
mod transform;

pub use figures;

pub use self::container::{BoxedChild, Container, Root};
pub use self::layout::{Layout, Layout2d, ParseError, Term};
pub use self::transform::{Geometry, Transformable};

/// Installs a global `tracing` Subscriber that prints to stdout.
///
/// Filtering can be configured with the `RUST_LOG` environment variable. If a
/// subscriber has already been installed, this function does nothing.
///
/// This function is only available with the `tracing-output` feature.
#[cfg(feature = "tracing-output")]
pub fn initialize_tracing() {
    use tracing::Level;
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;

    #[cfg(debug_assertions)]
    const MAX_LEVEL: Level = Level::INFO;
    #[cfg(not(debug_assertions))]
    const MAX_LEVEL: Level = Level::ERROR;

    let _result = tracing_subscriber::fmt::fmt()
        .with_max_level(MAX_LEVEL)
        .finish()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(MAX_LEVEL).into())
                .from_env_lossy(),
        )
        .try_init();
}
