// bluetick/src/models/mod.rs

//! Plain data carried through the store, the flows and the HTTP layer.

pub mod admin;
pub mod article;
pub mod fashion_job;
pub mod order;
pub mod package;
pub mod session;
pub mod site;

pub use admin::{AdminNote, AdminPanel, AdminTab, QuickAction};
pub use article::{Article, ArticleDraft, PostType};
pub use fashion_job::{FashionJob, JobStatus, OutputKind, Tier, UploadedFile};
pub use order::{CheckoutDraft, CheckoutPhase, CheckoutState, CheckoutView, DraftPatch, OrderSubmission, PaymentMethod};
pub use package::{catalog, find_package, Package, Platform};
pub use session::{StudioState, VisitorSession};
pub use site::{Section, Theme};
