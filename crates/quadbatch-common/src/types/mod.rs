mod color;
mod core;

pub use self::core::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_display() {
        assert_eq!(TextureId(3).to_string(), "texture-3");
        assert_eq!(ShaderId(1).to_string(), "shader-1");
        assert_eq!(BufferId(7).to_string(), "buffer-7");
    }

    #[test]
    fn zero_handles_are_invalid() {
        assert!(!TextureId::INVALID.is_valid());
        assert!(!ShaderId::INVALID.is_valid());
        assert!(TextureId(1).is_valid());
    }

    #[test]
    fn viewport_serialization() {
        let v = Viewport::new(0, 0, 800, 450);
        let json = serde_json::to_string(&v).unwrap();
        let back: Viewport = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }

    #[test]
    fn viewport_halves_for_each_eye() {
        let full = Viewport::new(0, 0, 800, 450);
        assert_eq!(full.eye(0), Viewport::new(0, 0, 400, 450));
        assert_eq!(full.eye(1), Viewport::new(400, 0, 400, 450));
    }

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 128));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn color_from_floats_clamps() {
        let c = Color::from_f32(1.5, 0.5, -1.0, 1.0);
        assert_eq!(c, Color::from_rgba(255, 127, 0, 255));
    }

    #[test]
    fn color_to_hex() {
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
        assert_eq!(Color::from_rgba(1, 2, 3, 4).to_hex(), "#01020304");
    }
}
