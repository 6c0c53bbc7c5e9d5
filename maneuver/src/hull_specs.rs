use crate::hull::HullParameters;

pub mod hulls {
    use super::*;

    // Full-bodied cargo ship used by the course-change scenario (SI units)
    pub fn reference_ship() -> HullParameters {
        HullParameters::new(
            100.0, // L
            20.0,  // B
            10.0,  // T
            0.8,   // Cb
            27.0,  // R66 ~ 0.27 L
            -3.0,  // xg, aft of midships
        )
    }

    // Slender, lightly loaded hull; handy for quick runs and tests
    pub fn small_coaster() -> HullParameters {
        HullParameters::new(40.0, 8.0, 3.0, 0.65, 10.0, -1.0)
    }
}
