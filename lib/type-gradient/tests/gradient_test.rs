// cargo test -p type-gradient --test gradient_test

use type_gradient::{Color, GradientConfig, generate_gradient, type_colors};

fn hex(s: &str) -> Color {
    s.parse().unwrap()
}

#[test]
fn test_single_color_starts_at_input() -> anyhow::Result<()> {
    for s in ["#F08030", "#6890F0", "#705848", "#000000"] {
        let color = hex(s);
        let img = generate_gradient(&[color])?;
        assert_eq!(color.to_rgb(), *img.get_pixel(0, 0), "{s}");
        assert_eq!(color.to_rgb(), *img.get_pixel(0, img.height() - 1), "{s}");
    }
    Ok(())
}

#[test]
fn test_single_color_moves_toward_white() -> anyhow::Result<()> {
    for s in ["#F08030", "#A040A0", "#FF0000", "#123456"] {
        let img = generate_gradient(&[hex(s)])?;

        for x in 1..img.width() {
            let prev = img.get_pixel(x - 1, 0).0;
            let cur = img.get_pixel(x, 0).0;
            for c in 0..3 {
                assert!(cur[c] >= prev[c], "{s} channel {c} at column {x}");
            }
        }

        let last = img.get_pixel(img.width() - 1, 0).0;
        assert!(last.iter().all(|&c| c >= 250), "{s} ends at {last:?}");
    }
    Ok(())
}

#[test]
fn test_only_last_pair_visible() -> anyhow::Result<()> {
    let (a, b, c) = (hex("#F08030"), hex("#6890F0"), hex("#78C850"));

    assert_eq!(generate_gradient(&[b, c])?, generate_gradient(&[a, b, c])?);

    let config = GradientConfig::new().with_width(300).with_height(4);
    assert_eq!(
        config.generate(&[b, c])?,
        config.generate(&[c, a, c, a, b, c])?
    );
    Ok(())
}

#[test]
fn test_two_colors_blend() -> anyhow::Result<()> {
    let (start, end) = (hex("#78C850"), hex("#A040A0"));
    let img = generate_gradient(&[start, end])?;

    assert_eq!(start.to_rgb(), *img.get_pixel(0, 0));
    assert_eq!(
        start.lerp(&end, 0.5).to_rgb(),
        *img.get_pixel(img.width() / 2, 10)
    );
    Ok(())
}

#[test]
fn test_type_palette_to_gradient() -> anyhow::Result<()> {
    let colors = type_colors(&["Grass", "Poison"]);
    let img = generate_gradient(&colors)?;
    assert_eq!(hex("#78C850").to_rgb(), *img.get_pixel(0, 0));
    Ok(())
}

#[test]
fn test_palette_pair_interior_pixels() -> anyhow::Result<()> {
    // fire -> electric, blue is equal at both ends and must never drop
    let img = generate_gradient(&type_colors(&["fire", "electric"]))?;

    assert_eq!(hex("#F08030").to_rgb(), *img.get_pixel(1, 0));
    assert_eq!(hex("#F4A830").to_rgb(), *img.get_pixel(725, 0));
    assert!((0..img.width()).all(|x| img.get_pixel(x, 0).0[2] == 0x30));
    Ok(())
}

#[test]
fn test_single_color_equal_channel_is_flat() -> anyhow::Result<()> {
    let img = generate_gradient(&[hex("#FF0000")])?;
    assert!((0..img.width()).all(|x| img.get_pixel(x, 0).0[0] == 0xFF));
    Ok(())
}
