//! Tests for raster export and loading scenes as images

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use op_art::EngineError;
    use op_art::color::{Color, ColorMode, Hsl, Rgb};
    use op_art::geometry::{PatternKind, Primitive, Shape};
    use op_art::io::raster::{
        RasterFormat, export_raster, load_scene_image, load_svg_image, raster_dimensions,
        raster_filename, raster_scale,
    };
    use op_art::math::transform::Point;
    use op_art::scene::{CanvasExtent, Scene};

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9)
            .single()
            .expect("valid timestamp")
    }

    fn small_scene(primitives: Vec<Primitive>) -> Scene {
        Scene {
            kind: PatternKind::EyePattern,
            color_mode: ColorMode::Rainbow,
            extent: CanvasExtent::new(10.0, 10.0).expect("valid extent"),
            primitives,
        }
    }

    fn assert_pixel(image: &image::RgbaImage, x: u32, y: u32, expected: [u8; 4]) {
        let actual = image.get_pixel(x, y).0;
        let close = actual
            .iter()
            .zip(expected)
            .all(|(&a, e)| a.abs_diff(e) <= 2);
        assert!(close, "pixel ({x}, {y}) is {actual:?}, expected {expected:?}");
    }

    fn midline() -> Primitive {
        Primitive::stroked(
            Shape::line(Point::new(0.0, 5.0), Point::new(10.0, 5.0)),
            Color::BLACK,
            1.0,
        )
    }

    // Tests format selectors including the jpg alias
    // Verified by rejecting the alias
    #[test]
    fn test_raster_format_from_str() {
        for format in RasterFormat::ALL {
            assert_eq!(format.as_str().parse::<RasterFormat>().ok(), Some(format));
        }
        assert_eq!("jpg".parse::<RasterFormat>().ok(), Some(RasterFormat::Jpeg));
    }

    // Tests unknown formats fail the export precondition
    // Verified by falling back to PNG
    #[test]
    fn test_raster_format_unknown() {
        assert!(matches!(
            "gif".parse::<RasterFormat>(),
            Err(EngineError::ExportPrecondition { .. })
        ));
    }

    // Tests the export scale is 2 times 4 oversampling
    // Verified by ignoring the oversample factor
    #[test]
    fn test_raster_dimensions() {
        assert!((raster_scale() - 8.0).abs() < f64::EPSILON);
        let extent = CanvasExtent::new(400.0, 225.0).expect("valid extent");
        assert_eq!(raster_dimensions(&extent), (3200, 1800));
    }

    // Tests opaque formats paint white and strokes land on their pixels
    // Verified by skipping the background fill
    #[test]
    fn test_load_scene_image_opaque() {
        let image = load_scene_image(&small_scene(vec![midline()]), Some(Rgb::WHITE))
            .expect("loadable scene");
        assert_eq!(image.dimensions(), (80, 80));
        assert_pixel(&image, 2, 2, [255, 255, 255, 255]);
        assert_pixel(&image, 40, 39, [0, 0, 0, 255]);
        assert_pixel(&image, 40, 70, [255, 255, 255, 255]);
    }

    // Tests transparent output leaves untouched pixels clear
    // Verified by filling the transparent background with white
    #[test]
    fn test_load_scene_image_transparent() {
        let image = load_scene_image(&small_scene(vec![midline()]), None).expect("loadable scene");
        assert_eq!(image.get_pixel(2, 2).0[3], 0);
        assert_pixel(&image, 40, 40, [0, 0, 0, 255]);
    }

    // Tests filled circles cover their interior
    // Verified by filling only the outline
    #[test]
    fn test_filled_circle() {
        let pupil = Primitive::filled(
            Shape::Circle {
                cx: 5.0,
                cy: 5.0,
                r: 2.0,
            },
            Color::Rgb(Rgb::new(10, 20, 30)),
        );
        let image = load_scene_image(&small_scene(vec![pupil]), Some(Rgb::WHITE))
            .expect("loadable scene");
        assert_pixel(&image, 40, 40, [10, 20, 30, 255]);
        assert_pixel(&image, 5, 5, [255, 255, 255, 255]);
    }

    // Tests rotations are applied before rasterizing
    // Verified by ignoring the rotation transform
    #[test]
    fn test_rotated_line() {
        let vertical = midline().with_rotation(90.0, Point::new(5.0, 5.0));
        let image = load_scene_image(&small_scene(vec![vertical]), Some(Rgb::WHITE))
            .expect("loadable scene");
        assert_pixel(&image, 40, 10, [0, 0, 0, 255]);
        assert_pixel(&image, 10, 40, [255, 255, 255, 255]);
    }

    // Tests HSL strokes from the color mapper render in their RGB equivalent
    // Verified by writing the HSL paint without percent signs
    #[test]
    fn test_hsl_stroke() {
        let red = Primitive::stroked(
            Shape::line(Point::new(0.0, 5.0), Point::new(10.0, 5.0)),
            Color::Hsl(Hsl::new(0.0, 100.0, 50.0)),
            2.0,
        );
        let image = load_scene_image(&small_scene(vec![red]), Some(Rgb::WHITE))
            .expect("loadable scene");
        assert_pixel(&image, 40, 40, [255, 0, 0, 255]);
    }

    // Tests a document that does not parse fails as a resource load
    // Verified by returning a blank image for unreadable documents
    #[test]
    fn test_unreadable_document_fails_to_load() {
        let result = load_svg_image("<svg xmlns=", 16, 16, Some(Rgb::WHITE));
        match result {
            Err(EngineError::ResourceLoad { reason }) => {
                assert!(reason.contains("did not load"));
            }
            other => unreachable!("Expected resource load error, got {other:?}"),
        }
    }

    // Tests a bare document is stretched to the requested pixel size
    // Verified by rendering at the document's own size
    #[test]
    fn test_load_svg_image_scales_to_target() {
        let document = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4mm" height="2mm" viewBox="0 0 4 2"><rect x="0" y="0" width="2" height="2" fill="#000000"/></svg>"##;
        let image = load_svg_image(document, 32, 16, None).expect("loadable document");
        assert_eq!(image.dimensions(), (32, 16));
        assert_pixel(&image, 4, 8, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(28, 8).0[3], 0);
    }

    // Tests oversized scenes fail to load as an image resource
    // Verified by raising the pixel limit
    #[test]
    fn test_oversized_scene_fails_to_load() {
        let huge = Scene {
            extent: CanvasExtent::new(3000.0, 10.0).expect("valid extent"),
            ..small_scene(vec![midline()])
        };
        assert!(matches!(
            load_scene_image(&huge, Some(Rgb::WHITE)),
            Err(EngineError::ResourceLoad { .. })
        ));
        assert!(matches!(
            export_raster(&huge, RasterFormat::Png, timestamp()),
            Err(EngineError::ResourceLoad { .. })
        ));
    }

    // Tests exporting an empty scene is refused before loading
    // Verified by rasterizing a blank image
    #[test]
    fn test_export_empty_scene() {
        assert!(matches!(
            export_raster(&small_scene(Vec::new()), RasterFormat::Png, timestamp()),
            Err(EngineError::ExportPrecondition { .. })
        ));
    }

    // Tests encoded bytes carry the right file signatures
    // Verified by encoding JPEG output as PNG
    #[test]
    fn test_export_signatures() {
        let scene = small_scene(vec![midline()]);
        let png = export_raster(&scene, RasterFormat::Png, timestamp()).expect("png export");
        assert!(png.bytes.starts_with(&[0x89, b'P', b'N', b'G']));
        assert_eq!((png.width, png.height), (80, 80));

        let jpeg = export_raster(&scene, RasterFormat::Jpeg, timestamp()).expect("jpeg export");
        assert!(jpeg.bytes.starts_with(&[0xFF, 0xD8]));

        let clear = export_raster(&scene, RasterFormat::TransparentPng, timestamp())
            .expect("transparent export");
        let decoded = image::load_from_memory(&clear.bytes).expect("decodable png");
        assert_eq!(decoded.to_rgba8().get_pixel(2, 2).0[3], 0);
    }

    // Tests raster filenames include the color mode and transparency marker
    // Verified by omitting the color mode
    #[test]
    fn test_raster_filename() {
        let scene = small_scene(vec![midline()]);
        assert_eq!(
            raster_filename(&scene, RasterFormat::Png, timestamp()),
            "optical-art-eye-pattern-rainbow-10x10mm-2024-05-06T07-08-09.png"
        );
        assert_eq!(
            raster_filename(&scene, RasterFormat::Jpeg, timestamp()),
            "optical-art-eye-pattern-rainbow-10x10mm-2024-05-06T07-08-09.jpeg"
        );
        assert_eq!(
            raster_filename(&scene, RasterFormat::TransparentPng, timestamp()),
            "optical-art-eye-pattern-rainbow-10x10mm-transparent-2024-05-06T07-08-09.png"
        );
    }
}
