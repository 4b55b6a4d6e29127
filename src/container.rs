//! A widget that owns other widgets and keeps their layouts up to date.

use alot::{LotId, OrderedLots};
use figures::Size;

use crate::layout::{Layout2d, Term};
use crate::transform::{Geometry, Transformable};

/// A boxed [`Transformable`] owned by a [`Container`].
pub type BoxedChild = Box<dyn Transformable>;

/// A widget that contains other widgets.
///
/// Children's layouts are evaluated against the container's size. The
/// container pushes its size to every child when a child is added and
/// whenever its own size is re-evaluated, so a child's geometry is always
/// current by the time it is read.
#[derive(Debug, Default)]
pub struct Container {
    geometry: Geometry,
    children: OrderedLots<BoxedChild>,
}

impl Container {
    /// Returns an empty container with the given size layout.
    #[must_use]
    pub fn new(size: impl Into<Layout2d>) -> Self {
        Self {
            geometry: Geometry::new(Layout2d::default(), size),
            children: OrderedLots::new(),
        }
    }

    /// Adds `child` to this container and returns self.
    #[must_use]
    pub fn with_child(mut self, child: impl Transformable) -> Self {
        self.push(child);
        self
    }

    /// Adds `child` to this container, immediately evaluating its layouts
    /// against this container's size.
    pub fn push(&mut self, child: impl Transformable) -> LotId {
        self.push_boxed(Box::new(child))
    }

    /// Adds an already boxed `child` to this container.
    pub fn push_boxed(&mut self, mut child: BoxedChild) -> LotId {
        child.parent_resized(self.geometry.size());
        self.children.push(child)
    }

    /// Removes the child with `id`, returning it if it was found.
    ///
    /// The removed child keeps the geometry it was last given.
    pub fn remove(&mut self, id: LotId) -> Option<BoxedChild> {
        self.children.remove(id)
    }

    /// Returns the child with `id`, if it is still contained.
    #[must_use]
    pub fn get(&self, id: LotId) -> Option<&dyn Transformable> {
        self.children.get(id).map(|child| &**child)
    }

    /// Returns exclusive access to the child with `id`, if it is still
    /// contained.
    ///
    /// Use [`Transformable::set_position()`] and
    /// [`Transformable::set_size()`] to change a child's layouts. Changing them
    /// through [`Geometry`] directly skips
    /// [`Transformable::geometry_changed()`], so a nested container would not
    /// update its own children.
    pub fn get_mut(&mut self, id: LotId) -> Option<&mut BoxedChild> {
        self.children.get_mut(id)
    }

    /// Returns the number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if this container has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns an iterator over the children in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Transformable> + '_ {
        self.children.iter().map(|child| &**child)
    }

    fn resize_children(&mut self) {
        let size = self.geometry.size();
        tracing::trace!(
            "resizing {} children to {}x{}",
            self.children.len(),
            size.width,
            size.height
        );
        for index in 0..self.children.len() {
            self.children[index].parent_resized(size);
        }
    }
}

impl Transformable for Container {
    fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    fn geometry_mut(&mut self) -> &mut Geometry {
        &mut self.geometry
    }

    fn geometry_changed(&mut self) {
        self.resize_children();
    }
}

/// The outermost container, sized directly by the host window rather than by
/// layouts.
#[derive(Debug)]
pub struct Root {
    container: Container,
}

impl Root {
    /// Returns a root that fills `size`.
    #[must_use]
    pub fn new(size: Size<f32>) -> Self {
        let mut root = Self {
            container: Container::new((Term::percent(100., 0.), Term::percent(100., 0.))),
        };
        root.resize(size);
        root
    }

    /// The host window now has the size `size`.
    pub fn resize(&mut self, size: Size<f32>) {
        self.container.parent_resized(size);
    }

    /// Returns the size of the host window last passed to
    /// [`resize()`](Self::resize).
    #[must_use]
    pub fn size(&self) -> Size<f32> {
        self.container.size()
    }

    /// Returns the container holding the root's children.
    #[must_use]
    pub const fn container(&self) -> &Container {
        &self.container
    }

    /// Returns exclusive access to the container holding the root's children.
    pub fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }
}
