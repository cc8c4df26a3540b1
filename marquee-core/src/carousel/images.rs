//! Join over per-image load signals

use futures::future::join_all;
use std::future::Future;

use super::surface::ImageLoad;

/// Tally of image outcomes once every image has reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageSettlement {
    pub loaded: usize,
    pub errored: usize,
}

impl ImageSettlement {
    pub fn total(&self) -> usize {
        self.loaded + self.errored
    }
}

/// Resolves once every image has either loaded or errored.
///
/// Errors do not short-circuit: layout is measured only after all cards have
/// their final size, whatever that turned out to be.
pub async fn wait_for_images<I, F>(loads: I) -> ImageSettlement
where
    I: IntoIterator<Item = F>,
    F: Future<Output = ImageLoad>,
{
    join_all(loads)
        .await
        .into_iter()
        .fold(ImageSettlement::default(), |mut tally, outcome| {
            match outcome {
                ImageLoad::Loaded => tally.loaded += 1,
                ImageLoad::Errored => tally.errored += 1,
            }
            tally
        })
}
