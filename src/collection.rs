use crate::animator::{StripAnimator, StripError};
use crate::colors::Color;
use crate::command::{StripAction, StripCommand};
use crate::mode::Mode;

/// Slot number of a strip in a [`StripCollection`].
///
/// Slots are fixed at compile time by the collection's capacity, so the id is
/// also the index a host uses when it wires strips to driver channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripId(pub usize);

impl From<usize> for StripId {
    fn from(slot: usize) -> Self {
        StripId(slot)
    }
}

impl From<StripId> for usize {
    fn from(id: StripId) -> Self {
        id.0
    }
}

/// Failures when addressing strips in a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CollectionError {
    /// No strip is attached to this slot.
    InvalidStripId(StripId),

    /// The slot already drives a strip.
    DuplicateStripId(StripId),

    /// The slot number is past the last slot.
    StripIdOutOfBounds { id: StripId, capacity: usize },

    /// The addressed strip rejected its buffer or failed to tick.
    Strip(StripError),
}

impl core::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CollectionError::InvalidStripId(id) => {
                write!(f, "no strip attached to slot {}", id.0)
            }
            CollectionError::DuplicateStripId(id) => {
                write!(f, "slot {} already drives a strip", id.0)
            }
            CollectionError::StripIdOutOfBounds { id, capacity } => {
                write!(f, "slot {} is past the last of {} slots", id.0, capacity)
            }
            CollectionError::Strip(err) => {
                write!(f, "strip error: {}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CollectionError {}

impl From<StripError> for CollectionError {
    fn from(err: StripError) -> Self {
        CollectionError::Strip(err)
    }
}

/// A fixed-capacity set of independent strip animators.
///
/// Routes commands to individual strips and ticks all of them in one call.
/// Strips share nothing: each one borrows its own pixel buffer and keeps its
/// own mode.
///
/// # Type Parameters
/// * `'a` - Lifetime of the borrowed pixel buffers
/// * `MAX_STRIPS` - Maximum number of strips this collection can hold
pub struct StripCollection<'a, const MAX_STRIPS: usize> {
    strips: [Option<StripAnimator<'a>>; MAX_STRIPS],
}

impl<'a, const MAX_STRIPS: usize> StripCollection<'a, MAX_STRIPS> {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Self {
            strips: core::array::from_fn(|_| None),
        }
    }

    /// Adds a strip backed by `pixels` under the given ID.
    ///
    /// # Errors
    /// * `StripIdOutOfBounds` - `id` is past the last slot
    /// * `DuplicateStripId` - The slot already drives a strip
    /// * `Strip(EmptyStrip)` - `pixels` has no cells
    pub fn add_strip(&mut self, id: StripId, pixels: &'a mut [Color]) -> Result<(), CollectionError> {
        let slot = self.strips.get_mut(id.0).ok_or(CollectionError::StripIdOutOfBounds {
            id,
            capacity: MAX_STRIPS,
        })?;

        if slot.is_some() {
            return Err(CollectionError::DuplicateStripId(id));
        }

        *slot = Some(StripAnimator::new(pixels)?);
        Ok(())
    }

    /// Removes a strip, handing its pixel buffer back.
    pub fn remove_strip(&mut self, id: StripId) -> Result<&'a mut [Color], CollectionError> {
        self.slot_mut(id)?
            .take()
            .map(StripAnimator::into_pixels)
            .ok_or(CollectionError::InvalidStripId(id))
    }

    /// Applies an action to the strip with the given ID.
    pub fn handle_command(&mut self, id: StripId, action: StripAction) -> Result<(), CollectionError> {
        self.strip_mut(id)?.handle_action(action);
        Ok(())
    }

    /// Applies a routed [`StripCommand`].
    pub fn dispatch(&mut self, command: StripCommand<StripId>) -> Result<(), CollectionError> {
        self.handle_command(command.strip_id, command.action)
    }

    /// Ticks every strip once.
    ///
    /// A failing strip does not stop the others from being ticked; the first
    /// error encountered is returned after all strips have run.
    pub fn tick_all(&mut self) -> Result<(), CollectionError> {
        let mut first_error = None;

        for (index, strip) in self.strips.iter_mut().enumerate() {
            if let Some(strip) = strip {
                if let Err(err) = strip.tick() {
                    warn!("strip {} tick failed", index);
                    if first_error.is_none() {
                        first_error = Some(CollectionError::Strip(err));
                    }
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Returns the current mode of the specified strip.
    pub fn mode(&self, id: StripId) -> Result<Mode, CollectionError> {
        Ok(self.strip(id)?.mode())
    }

    /// Returns the pixel buffer of the specified strip.
    pub fn pixels(&self, id: StripId) -> Result<&[Color], CollectionError> {
        Ok(self.strip(id)?.pixels())
    }

    /// Returns a shared reference to the specified strip.
    pub fn strip(&self, id: StripId) -> Result<&StripAnimator<'a>, CollectionError> {
        self.strips
            .get(id.0)
            .ok_or(CollectionError::StripIdOutOfBounds {
                id,
                capacity: MAX_STRIPS,
            })?
            .as_ref()
            .ok_or(CollectionError::InvalidStripId(id))
    }

    /// Returns a mutable reference to the specified strip.
    pub fn strip_mut(&mut self, id: StripId) -> Result<&mut StripAnimator<'a>, CollectionError> {
        self.slot_mut(id)?
            .as_mut()
            .ok_or(CollectionError::InvalidStripId(id))
    }

    /// Returns the number of strips in the collection.
    pub fn len(&self) -> usize {
        self.strips.iter().filter(|s| s.is_some()).count()
    }

    /// Returns true if the collection holds no strips.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if a strip with the given ID exists.
    pub fn contains(&self, id: StripId) -> bool {
        self.strips.get(id.0).is_some_and(Option::is_some)
    }

    /// Returns the maximum number of strips.
    pub const fn capacity(&self) -> usize {
        MAX_STRIPS
    }

    fn slot_mut(&mut self, id: StripId) -> Result<&mut Option<StripAnimator<'a>>, CollectionError> {
        self.strips.get_mut(id.0).ok_or(CollectionError::StripIdOutOfBounds {
            id,
            capacity: MAX_STRIPS,
        })
    }
}

impl<const MAX_STRIPS: usize> Default for StripCollection<'_, MAX_STRIPS> {
    fn default() -> Self {
        Self::new()
    }
}
