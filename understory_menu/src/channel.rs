// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction channels and the per-item handler table.
//!
//! A physical activation reaches an item through exactly one [`Channel`], depending on
//! the platform: a pointer click, the end of a touch, or a native press. Handlers are
//! stored in a fixed table indexed by channel rather than looked up by name.
//!
//! ```
//! use understory_menu::channel::{Channel, ChannelHandlers, ChannelSet};
//!
//! let mut handlers: ChannelHandlers<u32> = ChannelHandlers::new();
//! handlers.set(Channel::Click, |_| {});
//! assert_eq!(handlers.bound(), ChannelSet::CLICK);
//! assert!(handlers.call(Channel::Click, &1));
//! assert!(!handlers.call(Channel::Press, &1));
//! ```

use alloc::boxed::Box;
use core::fmt;

use bitflags::bitflags;

/// Origin of an activation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Pointer click (web).
    Click,
    /// Touch end (web, touch devices).
    TouchEnd,
    /// Native press.
    Press,
}

impl Channel {
    /// Every channel, in table order.
    pub const ALL: [Self; 3] = [Self::Click, Self::TouchEnd, Self::Press];

    const fn slot(self) -> usize {
        match self {
            Self::Click => 0,
            Self::TouchEnd => 1,
            Self::Press => 2,
        }
    }

    /// The flag for this channel.
    pub const fn flag(self) -> ChannelSet {
        match self {
            Self::Click => ChannelSet::CLICK,
            Self::TouchEnd => ChannelSet::TOUCH_END,
            Self::Press => ChannelSet::PRESS,
        }
    }
}

bitflags! {
    /// A set of [`Channel`]s.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ChannelSet: u8 {
        /// [`Channel::Click`].
        const CLICK = 1 << 0;
        /// [`Channel::TouchEnd`].
        const TOUCH_END = 1 << 1;
        /// [`Channel::Press`].
        const PRESS = 1 << 2;
    }
}

impl ChannelSet {
    /// Whether `channel` is in the set.
    pub const fn has(self, channel: Channel) -> bool {
        self.contains(channel.flag())
    }

    /// The channels in the set, in table order.
    pub fn channels(self) -> impl Iterator<Item = Channel> {
        Channel::ALL.into_iter().filter(move |channel| self.has(*channel))
    }
}

impl From<Channel> for ChannelSet {
    fn from(channel: Channel) -> Self {
        channel.flag()
    }
}

/// A caller-supplied handler for one channel.
pub type Handler<E> = Box<dyn FnMut(&E)>;

/// Fixed table of optional handlers, one slot per [`Channel`].
pub struct ChannelHandlers<E> {
    slots: [Option<Handler<E>>; 3],
}

impl<E> ChannelHandlers<E> {
    /// An empty table.
    pub fn new() -> Self {
        Self {
            slots: [None, None, None],
        }
    }

    /// Install `handler` for `channel`, replacing any previous one.
    pub fn set(&mut self, channel: Channel, handler: impl FnMut(&E) + 'static) {
        self.slots[channel.slot()] = Some(Box::new(handler));
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, channel: Channel, handler: impl FnMut(&E) + 'static) -> Self {
        self.set(channel, handler);
        self
    }

    /// Remove the handler for `channel`, returning whether one was installed.
    pub fn clear(&mut self, channel: Channel) -> bool {
        self.slots[channel.slot()].take().is_some()
    }

    /// Whether `channel` has a handler.
    pub fn is_bound(&self, channel: Channel) -> bool {
        self.slots[channel.slot()].is_some()
    }

    /// The channels that have a handler.
    pub fn bound(&self) -> ChannelSet {
        Channel::ALL
            .into_iter()
            .filter(|channel| self.is_bound(*channel))
            .fold(ChannelSet::empty(), |set, channel| set | channel.flag())
    }

    /// Invoke the handler for `channel`, returning whether there was one.
    pub fn call(&mut self, channel: Channel, event: &E) -> bool {
        match &mut self.slots[channel.slot()] {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }
}

impl<E> Default for ChannelHandlers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ChannelHandlers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelHandlers")
            .field("bound", &self.bound())
            .finish_non_exhaustive()
    }
}
