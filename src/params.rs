//Numerical thresholds
pub const DEFAULT_TEST_THRESH : f32 = 0.001f32;

///Number of contour points drawn by default when sampling a 2D ellipsoid.
pub const DEFAULT_CONTOUR_SAMPLES : usize = 36;

//Demo driver settings
pub const DEMO_NUM_OBSTACLES : usize = 50;
pub const DEMO_OBSTACLE_HALF_WIDTH : f32 = 5.0f32;
pub const DEMO_MAJOR_AXIS : f32 = 2.0f32;
pub const DEMO_MINOR_AXIS : f32 = 0.75f32;
pub const DEMO_ROTATION : f32 = 0.5f32;
