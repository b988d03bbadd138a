//! Service layer providing the menu business logic on top of storage backends.
//! - `menu::repository` abstracts the storage backend behind one trait.
//! - `menu::repo` holds the three interchangeable implementations.
//! - `menu::MenuService` is the only surface the web layer talks to.

pub mod menu;

#[cfg(test)]
pub mod test_support;
