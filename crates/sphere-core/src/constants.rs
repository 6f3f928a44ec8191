// Shared layout, projection and interaction tuning constants.

// Projection
pub const BASE_RADIUS: f64 = 190.0; // sphere radius in canvas pixels
pub const FOV_FACTOR: f64 = 1.8; // fov = BASE_RADIUS * FOV_FACTOR

// Canvas defaults used until the front end reports the real backing size
pub const DEFAULT_VIEWPORT: (f64, f64) = (500.0, 500.0);

// Auto-rotation, radians per frame (x, y)
pub const NORMAL_ROTATION_SPEED: (f64, f64) = (0.0025, -0.0025);
pub const SLOW_ROTATION_SPEED: (f64, f64) = (0.001, -0.001); // while the pointer is over the region

// Interaction
pub const POINTER_GAIN: f64 = 0.00005; // radians per pixel of displacement from region center
pub const HIT_THRESHOLD_PX: f64 = 25.0; // strict: distance must be below this
pub const TOOLTIP_OFFSET_Y: f64 = 20.0; // tooltip sits above the hit point

// Label styling
pub const BASE_FONT_PX: f64 = 14.0;
pub const FONT_SCALE_PX: f64 = 20.0; // added per unit of perspective scale
pub const ALPHA_BASE: f64 = 0.7;
pub const ALPHA_DEPTH_GAIN: f64 = 0.25; // times (z + 1)
pub const LABEL_FILL: &str = "white";
pub const LABEL_FONT_FAMILY: &str = "Arial";

pub const DEFAULT_SKILLS: [&str; 20] = [
    "HTML",
    "CSS",
    "JavaScript",
    "React",
    "Node",
    "Vite",
    "Tailwind",
    "Docker",
    "Git",
    "Figma",
    "MYSQL",
    "NoSQL",
    "Python",
    "TensorFlow",
    "AWS",
    "Firebase",
    "Vercel",
    "Linux",
    "TypeScript",
    "GraphQL",
];
