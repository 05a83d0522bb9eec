//! Consecutive-duplicate suppression for streams.

use futures::future;
use futures::stream::{Stream, StreamExt};

/// Yields an item only when it differs from the previously yielded one.
///
/// # Examples
///
/// ```rust
/// use futures::executor::block_on;
/// use futures::stream;
/// use futures::StreamExt;
/// use ngry::store::distinct_until_changed;
///
/// let items: Vec<i32> =
///     block_on(distinct_until_changed(stream::iter([1, 1, 2, 2, 1])).collect());
///
/// assert_eq!(items, vec![1, 2, 1]);
/// ```
pub fn distinct_until_changed<S>(stream: S) -> impl Stream<Item = S::Item>
where
    S: Stream,
    S::Item: PartialEq + Clone,
{
    let mut last: Option<S::Item> = None;

    stream.filter_map(move |item| {
        let changed = last.as_ref() != Some(&item);
        if changed {
            last = Some(item.clone());
        }
        future::ready(changed.then_some(item))
    })
}
