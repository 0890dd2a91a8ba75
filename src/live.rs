//! Single-flight generation for a surface that follows a changing input.
//!
//! Only available with the `async` feature.
//!
//! Every call to [`LiveIdenticon::request`] supersedes the previous one:
//! the older future is aborted, and if it already got past hashing it
//! notices the newer epoch under the surface lock and draws nothing. A
//! clear-and-draw sequence always runs to completion under that lock, so
//! two requests never interleave on the surface.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures_util::future::{AbortHandle, Abortable, Aborted};
use parking_lot::Mutex;
use tracing::debug;

use crate::error::IdenticonResult;
use crate::generate::Identicon;
use crate::hash::Digest;
use crate::surface::Surface;

/// How a request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The identicon for this digest is now on the surface
    Rendered(Digest),
    /// A newer request took over; the surface was not touched
    Superseded,
}

/// Future returned by [`LiveIdenticon::request`].
pub type PendingRender = Pin<Box<dyn Future<Output = IdenticonResult<Outcome>> + Send>>;

/// A surface kept in sync with the latest requested input.
pub struct LiveIdenticon<S> {
    identicon: Arc<Identicon>,
    surface: Arc<Mutex<S>>,
    epoch: Arc<AtomicU64>,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl<S: Surface + Send + 'static> LiveIdenticon<S> {
    /// Take ownership of `surface` and draw onto it with `identicon`.
    pub fn new(identicon: Identicon, surface: S) -> Self {
        Self {
            identicon: Arc::new(identicon),
            surface: Arc::new(Mutex::new(surface)),
            epoch: Arc::new(AtomicU64::new(0)),
            in_flight: Mutex::new(None),
        }
    }

    /// Request a redraw for `input`, superseding any earlier request.
    ///
    /// The returned future does the work when polled and needs no runtime.
    /// It may block briefly on the surface lock while another request draws.
    pub fn request(&self, input: impl Into<String>) -> PendingRender {
        let input = input.into();
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.in_flight.lock().replace(handle) {
            previous.abort();
        }

        let identicon = Arc::clone(&self.identicon);
        let surface = Arc::clone(&self.surface);
        let latest = Arc::clone(&self.epoch);

        let work = async move {
            let digest = identicon.digest(&input);
            let mut surface = surface.lock();
            if latest.load(Ordering::SeqCst) != epoch {
                debug!(epoch, "Request superseded after hashing");
                return Ok(Outcome::Superseded);
            }
            identicon.render_digest(&digest, &mut *surface)?;
            Ok(Outcome::Rendered(digest))
        };

        Box::pin(async move {
            match Abortable::new(work, registration).await {
                Ok(result) => result,
                Err(Aborted) => {
                    debug!(epoch, "Request aborted");
                    Ok(Outcome::Superseded)
                }
            }
        })
    }

    /// Run `f` with shared access to the surface.
    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let guard = self.surface.lock();
        f(&guard)
    }

    /// The generator in use.
    pub fn identicon(&self) -> &Identicon {
        &self.identicon
    }

    /// Number of requests issued so far.
    pub fn requests(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }
}
