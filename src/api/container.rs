use std::cell::Cell;
use std::rc::Rc;

use crate::core::BoxSize;

/// Host element the chart fills; measured on every rebuild.
pub trait ChartContainer {
    fn id(&self) -> &str;
    fn box_size(&self) -> BoxSize;
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixedContainer {
    id: String,
    size: BoxSize,
}

impl FixedContainer {
    #[must_use]
    pub fn new(id: impl Into<String>, size: BoxSize) -> Self {
        Self {
            id: id.into(),
            size,
        }
    }
}

impl ChartContainer for FixedContainer {
    fn id(&self) -> &str {
        &self.id
    }

    fn box_size(&self) -> BoxSize {
        self.size
    }
}

/// Container whose size the host updates through a shared handle.
///
/// Clones share the same size cell, so a host keeps one clone and hands the
/// other to the engine.
#[derive(Debug, Clone)]
pub struct ResizableContainer {
    id: Rc<str>,
    size: Rc<Cell<BoxSize>>,
}

impl ResizableContainer {
    #[must_use]
    pub fn new(id: impl Into<String>, size: BoxSize) -> Self {
        Self {
            id: Rc::from(id.into()),
            size: Rc::new(Cell::new(size)),
        }
    }

    pub fn resize(&self, size: BoxSize) {
        self.size.set(size);
    }
}

impl ChartContainer for ResizableContainer {
    fn id(&self) -> &str {
        &self.id
    }

    fn box_size(&self) -> BoxSize {
        self.size.get()
    }
}
