//! # Product Store
//!
//! An ordered, append-only store owned by a single Tokio task, with explicit change
//! notification for observers.
//!
//! ## Architecture Overview
//!
//! 1. **Item Layer** ([`StoreItem`]) - the value type being stored
//! 2. **Runtime Layer** ([`StoreActor`]) - sole owner of the sequence, processes requests one at a time
//! 3. **Interface Layer** ([`StoreClient`], [`StoreHandle`]) - cloneable handles passed to whoever needs the store
//!
//! The store supports exactly two mutations: [`replace_all`](StoreClient::replace_all)
//! and [`append`](StoreClient::append). There is no update and no removal. Every
//! mutation bumps a [`Revision`] that subscribers receive through a
//! `tokio::sync::watch` channel, so derived views know when to recompute.
//!
//! ```rust
//! use product_store::{Change, StoreActor, StoreItem};
//! use std::num::NonZeroUsize;
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: u32 }
//! impl StoreItem for Note {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.id }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::<Note>::new(NonZeroUsize::new(16).unwrap());
//!     tokio::spawn(actor.run());
//!
//!     let mut changes = client.subscribe().await.unwrap();
//!     client.replace_all(vec![Note { id: 1 }, Note { id: 2 }]).await.unwrap();
//!
//!     changes.changed().await.unwrap();
//!     assert_eq!(changes.borrow().change, Change::Replaced);
//!     assert_eq!(changes.borrow().len, 2);
//! }
//! ```
//!
//! ## Testing
//!
//! See the [`mock`] module for a scripted store that needs no running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::StoreHandle;
pub use entity::StoreItem;
pub use error::StoreError;
pub use message::{Change, Response, Revision, StoreRequest};
