//! Cart Repository Interface
//!
//! Persistence port of the cart container. The container reads through it
//! once at creation and writes the full entry list after every mutation.

use crate::entities::CartEntry;
use crate::error::Result;

/// Repository: Cart Entry Persistence
///
/// # Example
///
/// ```ignore
/// use cart_domain::repositories::CartRepository;
///
/// let entries = repo.load()?;
/// repo.save(&entries)?;
/// ```
pub trait CartRepository: Send + Sync {
    /// Load the persisted entries
    ///
    /// Returns an empty list when nothing has been stored yet. Stored data
    /// that cannot be decoded is an error; the caller decides the fallback.
    fn load(&self) -> Result<Vec<CartEntry>>;

    /// Replace the persisted entries with `entries`
    fn save(&self, entries: &[CartEntry]) -> Result<()>;
}
