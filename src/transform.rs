//! Types for giving widgets a position and size that follow their parent.

use std::fmt::Debug;

use figures::{Point, Size};

use crate::layout::{Layout, Layout2d, Term};

/// The position and size of a widget, expressed as [`Layout2d`]s.
///
/// `Geometry` remembers the last parent size it was given so that replacing a
/// layout takes effect immediately, without waiting for the parent to resize
/// again.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Geometry {
    position: Layout2d,
    size: Layout2d,
    parent_size: Option<Size<f32>>,
}

impl Geometry {
    /// Returns a geometry with the given position and size layouts.
    #[must_use]
    pub fn new(position: impl Into<Layout2d>, size: impl Into<Layout2d>) -> Self {
        Self {
            position: position.into(),
            size: size.into(),
            parent_size: None,
        }
    }

    /// Replaces the position layout.
    pub fn set_position(&mut self, position: impl Into<Layout2d>) {
        self.position = position.into();
        if let Some(parent) = self.parent_size {
            self.position.update_parent_size(parent);
        }
    }

    /// Replaces the size layout.
    pub fn set_size(&mut self, size: impl Into<Layout2d>) {
        self.size = size.into();
        if let Some(parent) = self.parent_size {
            self.size.update_parent_size(parent);
        }
    }

    /// Offsets the current position layout by a constant amount.
    pub fn move_by(&mut self, x: f32, y: f32) {
        let position = std::mem::take(&mut self.position);
        self.set_position(Layout2d::new(
            position.x + Layout::from(Term::constant(x)),
            position.y + Layout::from(Term::constant(y)),
        ));
    }

    /// Re-evaluates both layouts against the parent's new size.
    pub fn update_parent_size(&mut self, parent: Size<f32>) {
        self.parent_size = Some(parent);
        self.position.update_parent_size(parent);
        self.size.update_parent_size(parent);
    }

    /// Returns the last parent size pushed to this geometry, if any.
    #[must_use]
    pub const fn parent_size(&self) -> Option<Size<f32>> {
        self.parent_size
    }

    /// Returns the evaluated position.
    #[must_use]
    pub fn position(&self) -> Point<f32> {
        self.position.value()
    }

    /// Returns the evaluated size.
    #[must_use]
    pub fn size(&self) -> Size<f32> {
        let size = self.size.value();
        Size::new(size.x, size.y)
    }

    /// Returns the layout used for the position.
    #[must_use]
    pub const fn position_layout(&self) -> &Layout2d {
        &self.position
    }

    /// Returns the layout used for the size.
    #[must_use]
    pub const fn size_layout(&self) -> &Layout2d {
        &self.size
    }
}

/// A widget that is positioned and sized by a [`Geometry`].
///
/// Whoever owns a `Transformable` must call
/// [`parent_resized()`](Self::parent_resized) every time the size its layouts
/// are relative to changes, before the widget's geometry is read again.
pub trait Transformable: Debug + Send + 'static {
    /// Returns this widget's geometry.
    fn geometry(&self) -> &Geometry;

    /// Returns exclusive access to this widget's geometry.
    fn geometry_mut(&mut self) -> &mut Geometry;

    /// The position or size of this widget has been re-evaluated.
    ///
    /// Widgets that arrange their own visual elements should reposition them
    /// here.
    fn geometry_changed(&mut self) {}

    /// The parent of this widget now has the size `parent`.
    fn parent_resized(&mut self, parent: Size<f32>) {
        self.geometry_mut().update_parent_size(parent);
        self.geometry_changed();
    }

    /// Returns the full area this widget occupies.
    ///
    /// Widgets that draw outside of their size, such as borders, should
    /// include that area.
    fn full_size(&self) -> Size<f32> {
        self.geometry().size()
    }

    /// Replaces this widget's position layout and re-evaluates it against the
    /// last parent size.
    fn set_position(&mut self, position: Layout2d) {
        self.geometry_mut().set_position(position);
        self.geometry_changed();
    }

    /// Replaces this widget's size layout and re-evaluates it against the last
    /// parent size.
    ///
    /// Containers push the new size to their children.
    fn set_size(&mut self, size: Layout2d) {
        self.geometry_mut().set_size(size);
        self.geometry_changed();
    }

    /// Returns this widget's evaluated position.
    fn position(&self) -> Point<f32> {
        self.geometry().position()
    }

    /// Returns this widget's evaluated size.
    fn size(&self) -> Size<f32> {
        self.geometry().size()
    }
}
