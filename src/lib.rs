//! Root crate facade for the NoteSafe server and its core library.

pub use notesafe_core::{codec, constants, listing, service, text};
pub use notesafe_server::{
    config, create_app, db, envelope, error, handlers, models, resolve_bind_address,
    serve_router, ApiResponse, AppError, AppState, Config, Database, HttpError, NoteService,
    XorCodec, DEFAULT_PORT,
};
