use core::ops::Range;

use crate::config::{LAYER_COUNT, LAYER_SIZE, LED_COUNT};

/// Contiguous block of LEDs lit as one visual group
///
/// Half-open: `start` is included, `end` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer {
    pub start: u8,
    pub end: u8,
}

impl Layer {
    /// Get the number of LEDs in the layer
    pub const fn count(self) -> u8 {
        self.end - self.start
    }

    /// LED indices covered by the layer
    pub const fn range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn layer(position: usize) -> Layer {
    Layer {
        start: (position * LAYER_SIZE) as u8,
        end: ((position + 1) * LAYER_SIZE) as u8,
    }
}

/// The lamp layers, bottom first: 0-8, 9-17, 18-26, 27-35, 36-44
pub const LAYERS: [Layer; LAYER_COUNT] = [layer(0), layer(1), layer(2), layer(3), layer(4)];

const _: () = assert!(is_partition(&LAYERS, LED_COUNT), "layers must tile the strip");

/// Check that the layers cover `0..len` exactly once each, in order.
///
/// Ordered adjacency is enough: every layer must start where the
/// previous one ended and be non-empty.
pub const fn is_partition(layers: &[Layer], len: usize) -> bool {
    let mut expected_start = 0;
    let mut i = 0;
    while i < layers.len() {
        let layer = layers[i];
        if layer.start as usize != expected_start || layer.end <= layer.start {
            return false;
        }
        expected_start = layer.end as usize;
        i += 1;
    }
    expected_start == len
}
