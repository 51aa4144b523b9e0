//! Bounded undo/redo history of camera poses

use std::collections::VecDeque;

use crate::camera::CameraPose;

/// Fixed-capacity stack that overwrites its oldest entry when full
#[derive(Debug, Clone)]
pub struct RingStack<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> RingStack<T> {
    /// A capacity of zero is raised to one. Storage grows on demand up
    /// to `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Camera poses behind (`old`) and ahead of (`future`) the current one
#[derive(Debug, Clone)]
pub struct CameraHistory {
    old: RingStack<CameraPose>,
    future: RingStack<CameraPose>,
}

impl CameraHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            old: RingStack::with_capacity(capacity),
            future: RingStack::with_capacity(capacity),
        }
    }

    /// Record the pose the camera is about to leave
    pub fn push(&mut self, pose: CameraPose) {
        self.old.push(pose);
    }

    /// Step back: returns the most recent recorded pose and remembers
    /// `current` for [`redo`](Self::redo). Does nothing when there is no
    /// older pose.
    pub fn undo(&mut self, current: CameraPose) -> Option<CameraPose> {
        let pose = self.old.pop()?;
        self.future.push(current);
        Some(pose)
    }

    /// Step forward again after [`undo`](Self::undo)
    pub fn redo(&mut self, current: CameraPose) -> Option<CameraPose> {
        let pose = self.future.pop()?;
        self.old.push(current);
        Some(pose)
    }

    pub fn undo_len(&self) -> usize {
        self.old.len()
    }

    pub fn redo_len(&self) -> usize {
        self.future.len()
    }
}

impl Default for CameraHistory {
    fn default() -> Self {
        Self::new(256)
    }
}
