use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use rand::Rng;

const PAPER_SIZE: u32 = 64;
// Off-white photo paper.
const PAPER_RGB: [u8; 3] = [0xFD, 0xFB, 0xF7];

/// Procedural blank "paper" texture shown on placards whose photo has not
/// loaded (or does not exist): off-white with a light sprinkle of grain.
pub fn blank_paper_image(rng: &mut impl Rng) -> Image {
    let mut data = Vec::with_capacity((PAPER_SIZE * PAPER_SIZE * 4) as usize);
    for _ in 0..PAPER_SIZE * PAPER_SIZE {
        data.extend_from_slice(&[PAPER_RGB[0], PAPER_RGB[1], PAPER_RGB[2], 0xFF]);
    }

    for _ in 0..100 {
        let x = rng.gen_range(0..PAPER_SIZE);
        let y = rng.gen_range(0..PAPER_SIZE);
        for dy in 0..2u32 {
            for dx in 0..2u32 {
                let px = (x + dx).min(PAPER_SIZE - 1);
                let py = (y + dy).min(PAPER_SIZE - 1);
                let at = ((py * PAPER_SIZE + px) * 4) as usize;
                // Darken by ~5%.
                for channel in 0..3 {
                    let value = data[at + channel];
                    data[at + channel] = value - value / 20;
                }
            }
        }
    }

    Image::new(
        Extent3d {
            width: PAPER_SIZE,
            height: PAPER_SIZE,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn paper_is_opaque_and_mostly_bright() {
        let mut rng = SmallRng::seed_from_u64(5);
        let image = blank_paper_image(&mut rng);
        let data = image.data.as_ref().expect("cpu-side image data");
        assert_eq!(data.len(), (PAPER_SIZE * PAPER_SIZE * 4) as usize);
        let bright = data
            .chunks_exact(4)
            .filter(|px| px[0] >= PAPER_RGB[0] - 1 && px[3] == 0xFF)
            .count();
        // Grain touches at most 100 * 4 texels.
        assert!(bright as u32 >= PAPER_SIZE * PAPER_SIZE - 400);
    }
}
