//! Global baseline register settings.
//!
//! The fixed register/value blob written first on every stream start. It
//! establishes the sensor's analog and digital baseline behavior and is
//! opaque to the control logic: the driver applies it as a single table and
//! never reasons about individual entries. Registers owned by the control
//! path (standby, hold, timing, exposure, gain, flip, bit depth) are
//! deliberately absent and written separately; the lane-mode entry here is
//! only the 2-lane default and is overwritten later in the start sequence.

use crate::registers::RegVal;

/// Global initialization blob, applied before any per-mode settings.
pub const GLOBAL_SETTINGS: &[RegVal] = &[
    RegVal { addr: 0x3002, value: 0x00 },
    RegVal { addr: 0x301a, value: 0x00 },
    RegVal { addr: 0x301b, value: 0x00 },
    RegVal { addr: 0x301c, value: 0x00 },
    RegVal { addr: 0x301e, value: 0x01 },
    RegVal { addr: 0x3024, value: 0x00 },
    RegVal { addr: 0x303c, value: 0x00 },
    RegVal { addr: 0x303d, value: 0x00 },
    RegVal { addr: 0x303e, value: 0x10 },
    RegVal { addr: 0x303f, value: 0x0f },
    RegVal { addr: 0x3040, value: 0x01 },
    RegVal { addr: 0x3042, value: 0x00 },
    RegVal { addr: 0x3043, value: 0x00 },
    RegVal { addr: 0x3044, value: 0x00 },
    RegVal { addr: 0x3045, value: 0x00 },
    RegVal { addr: 0x3046, value: 0x84 },
    RegVal { addr: 0x3047, value: 0x08 },
    RegVal { addr: 0x3054, value: 0x0e },
    RegVal { addr: 0x3055, value: 0x00 },
    RegVal { addr: 0x3056, value: 0x00 },
    RegVal { addr: 0x3058, value: 0x8a },
    RegVal { addr: 0x3059, value: 0x01 },
    RegVal { addr: 0x305a, value: 0x00 },
    RegVal { addr: 0x3060, value: 0x16 },
    RegVal { addr: 0x3061, value: 0x01 },
    RegVal { addr: 0x3062, value: 0x00 },
    RegVal { addr: 0x3064, value: 0xc4 },
    RegVal { addr: 0x3065, value: 0x0c },
    RegVal { addr: 0x3066, value: 0x00 },
    RegVal { addr: 0x3069, value: 0x00 },
    RegVal { addr: 0x306a, value: 0x00 },
    RegVal { addr: 0x306e, value: 0x00 },
    RegVal { addr: 0x306f, value: 0x00 },
    RegVal { addr: 0x3070, value: 0x00 },
    RegVal { addr: 0x3071, value: 0x00 },
    RegVal { addr: 0x3074, value: 0x64 },
    RegVal { addr: 0x3081, value: 0x00 },
    RegVal { addr: 0x308c, value: 0x00 },
    RegVal { addr: 0x308d, value: 0x01 },
    RegVal { addr: 0x3094, value: 0x00 },
    RegVal { addr: 0x3095, value: 0x00 },
    RegVal { addr: 0x3096, value: 0x00 },
    RegVal { addr: 0x3097, value: 0x00 },
    RegVal { addr: 0x309c, value: 0x00 },
    RegVal { addr: 0x309d, value: 0x00 },
    RegVal { addr: 0x30a4, value: 0xaa },
    RegVal { addr: 0x30a6, value: 0x00 },
    RegVal { addr: 0x30cc, value: 0x00 },
    RegVal { addr: 0x30cd, value: 0x00 },
    RegVal { addr: 0x30d5, value: 0x04 },
    RegVal { addr: 0x30dc, value: 0x32 },
    RegVal { addr: 0x30dd, value: 0x00 },
    RegVal { addr: 0x3400, value: 0x01 },
    RegVal { addr: 0x3460, value: 0x21 },
    RegVal { addr: 0x3478, value: 0xa1 },
    RegVal { addr: 0x347c, value: 0x01 },
    RegVal { addr: 0x3480, value: 0x01 },
    RegVal { addr: 0x36d0, value: 0x00 },
    RegVal { addr: 0x36d1, value: 0x10 },
    RegVal { addr: 0x36d4, value: 0x00 },
    RegVal { addr: 0x36d5, value: 0x10 },
    RegVal { addr: 0x36e2, value: 0x00 },
    RegVal { addr: 0x36e4, value: 0x00 },
    RegVal { addr: 0x36e5, value: 0x00 },
    RegVal { addr: 0x36e6, value: 0x00 },
    RegVal { addr: 0x36e8, value: 0x00 },
    RegVal { addr: 0x36e9, value: 0x00 },
    RegVal { addr: 0x36ea, value: 0x00 },
    RegVal { addr: 0x36ec, value: 0x00 },
    RegVal { addr: 0x36ee, value: 0x00 },
    RegVal { addr: 0x36ef, value: 0x00 },
    RegVal { addr: 0x3930, value: 0x66 },
    RegVal { addr: 0x3931, value: 0x01 },
    RegVal { addr: 0x3a4c, value: 0x39 },
    RegVal { addr: 0x3a4d, value: 0x01 },
    RegVal { addr: 0x3a4e, value: 0x14 },
    RegVal { addr: 0x3a50, value: 0x48 },
    RegVal { addr: 0x3a51, value: 0x01 },
    RegVal { addr: 0x3a52, value: 0x14 },
    RegVal { addr: 0x3a56, value: 0x00 },
    RegVal { addr: 0x3a5a, value: 0x00 },
    RegVal { addr: 0x3a5e, value: 0x00 },
    RegVal { addr: 0x3a62, value: 0x00 },
    RegVal { addr: 0x3a6a, value: 0x20 },
    RegVal { addr: 0x3a6c, value: 0x42 },
    RegVal { addr: 0x3a6e, value: 0xa0 },
    RegVal { addr: 0x3b2c, value: 0x0c },
    RegVal { addr: 0x3b30, value: 0x1c },
    RegVal { addr: 0x3b34, value: 0x0c },
    RegVal { addr: 0x3b38, value: 0x1c },
    RegVal { addr: 0x3ba0, value: 0x0c },
    RegVal { addr: 0x3ba4, value: 0x1c },
    RegVal { addr: 0x3ba8, value: 0x0c },
    RegVal { addr: 0x3bac, value: 0x1c },
    RegVal { addr: 0x3d3c, value: 0x11 },
    RegVal { addr: 0x3d46, value: 0x0b },
    RegVal { addr: 0x3de0, value: 0x3f },
    RegVal { addr: 0x3de1, value: 0x08 },
    RegVal { addr: 0x3e10, value: 0x10 },
    RegVal { addr: 0x3e14, value: 0x87 },
    RegVal { addr: 0x3e16, value: 0x91 },
    RegVal { addr: 0x3e18, value: 0x91 },
    RegVal { addr: 0x3e1a, value: 0x87 },
    RegVal { addr: 0x3e1c, value: 0x78 },
    RegVal { addr: 0x3e1e, value: 0x50 },
    RegVal { addr: 0x3e20, value: 0x50 },
    RegVal { addr: 0x3e22, value: 0x50 },
    RegVal { addr: 0x3e24, value: 0x87 },
    RegVal { addr: 0x3e26, value: 0x91 },
    RegVal { addr: 0x3e28, value: 0x91 },
    RegVal { addr: 0x3e2a, value: 0x87 },
    RegVal { addr: 0x3e2c, value: 0x78 },
    RegVal { addr: 0x3e2e, value: 0x50 },
    RegVal { addr: 0x3e30, value: 0x50 },
    RegVal { addr: 0x3e32, value: 0x50 },
    RegVal { addr: 0x3e34, value: 0x87 },
    RegVal { addr: 0x3e36, value: 0x91 },
    RegVal { addr: 0x3e38, value: 0x91 },
    RegVal { addr: 0x3e3a, value: 0x87 },
    RegVal { addr: 0x3e3c, value: 0x78 },
    RegVal { addr: 0x3e3e, value: 0x50 },
    RegVal { addr: 0x3e40, value: 0x50 },
    RegVal { addr: 0x3e42, value: 0x50 },
    RegVal { addr: 0x4054, value: 0x64 },
    RegVal { addr: 0x4148, value: 0xfe },
    RegVal { addr: 0x4149, value: 0x05 },
    RegVal { addr: 0x414a, value: 0xff },
    RegVal { addr: 0x414b, value: 0x05 },
    RegVal { addr: 0x420a, value: 0x03 },
    RegVal { addr: 0x4231, value: 0x18 },
    RegVal { addr: 0x423d, value: 0x9c },
    RegVal { addr: 0x4242, value: 0xb4 },
    RegVal { addr: 0x4246, value: 0xb4 },
    RegVal { addr: 0x424e, value: 0xb4 },
    RegVal { addr: 0x425c, value: 0xb4 },
    RegVal { addr: 0x425e, value: 0xb6 },
    RegVal { addr: 0x426c, value: 0xb4 },
    RegVal { addr: 0x426e, value: 0xb6 },
    RegVal { addr: 0x428c, value: 0xb4 },
    RegVal { addr: 0x428e, value: 0xb6 },
    RegVal { addr: 0x4708, value: 0x00 },
    RegVal { addr: 0x4709, value: 0x00 },
    RegVal { addr: 0x470a, value: 0xff },
    RegVal { addr: 0x470b, value: 0x03 },
    RegVal { addr: 0x470c, value: 0x00 },
    RegVal { addr: 0x470d, value: 0x00 },
    RegVal { addr: 0x470e, value: 0xff },
    RegVal { addr: 0x470f, value: 0x03 },
    RegVal { addr: 0x47eb, value: 0x1c },
    RegVal { addr: 0x47f0, value: 0xa6 },
    RegVal { addr: 0x47f2, value: 0xa6 },
    RegVal { addr: 0x47f4, value: 0xa0 },
    RegVal { addr: 0x47f6, value: 0x96 },
    RegVal { addr: 0x4808, value: 0xa6 },
    RegVal { addr: 0x480a, value: 0xa6 },
    RegVal { addr: 0x480c, value: 0xa0 },
    RegVal { addr: 0x480e, value: 0x96 },
    RegVal { addr: 0x492c, value: 0xb2 },
    RegVal { addr: 0x4930, value: 0x03 },
    RegVal { addr: 0x4932, value: 0x03 },
    RegVal { addr: 0x4936, value: 0x5b },
    RegVal { addr: 0x4938, value: 0x82 },
    RegVal { addr: 0x493c, value: 0x23 },
    RegVal { addr: 0x493e, value: 0x23 },
    RegVal { addr: 0x4940, value: 0x23 },
    RegVal { addr: 0x4ba8, value: 0x1c },
    RegVal { addr: 0x4ba9, value: 0x03 },
    RegVal { addr: 0x4bac, value: 0x1c },
    RegVal { addr: 0x4bad, value: 0x1c },
    RegVal { addr: 0x4bae, value: 0x1c },
    RegVal { addr: 0x4baf, value: 0x1c },
    RegVal { addr: 0x4bb0, value: 0x1c },
    RegVal { addr: 0x4bb1, value: 0x1c },
    RegVal { addr: 0x4bb2, value: 0x1c },
    RegVal { addr: 0x4bb3, value: 0x1c },
    RegVal { addr: 0x4bb4, value: 0x1c },
    RegVal { addr: 0x4bb8, value: 0x03 },
    RegVal { addr: 0x4bb9, value: 0x03 },
    RegVal { addr: 0x4bba, value: 0x03 },
    RegVal { addr: 0x4bbb, value: 0x03 },
    RegVal { addr: 0x4bbc, value: 0x03 },
    RegVal { addr: 0x4bbd, value: 0x03 },
    RegVal { addr: 0x4bbe, value: 0x03 },
    RegVal { addr: 0x4bbf, value: 0x03 },
    RegVal { addr: 0x4bc0, value: 0x03 },
    RegVal { addr: 0x4c14, value: 0x87 },
    RegVal { addr: 0x4c16, value: 0x91 },
    RegVal { addr: 0x4c18, value: 0x91 },
    RegVal { addr: 0x4c1a, value: 0x87 },
    RegVal { addr: 0x4c1c, value: 0x78 },
    RegVal { addr: 0x4c1e, value: 0x50 },
    RegVal { addr: 0x4c20, value: 0x50 },
    RegVal { addr: 0x4c22, value: 0x50 },
    RegVal { addr: 0x4c24, value: 0x87 },
    RegVal { addr: 0x4c26, value: 0x91 },
    RegVal { addr: 0x4c28, value: 0x91 },
    RegVal { addr: 0x4c2a, value: 0x87 },
    RegVal { addr: 0x4c2c, value: 0x78 },
    RegVal { addr: 0x4c2e, value: 0x50 },
    RegVal { addr: 0x4c30, value: 0x50 },
    RegVal { addr: 0x4c32, value: 0x50 },
    RegVal { addr: 0x4c34, value: 0x87 },
    RegVal { addr: 0x4c36, value: 0x91 },
    RegVal { addr: 0x4c38, value: 0x91 },
    RegVal { addr: 0x4c3a, value: 0x87 },
    RegVal { addr: 0x4c3c, value: 0x78 },
    RegVal { addr: 0x4c3e, value: 0x50 },
    RegVal { addr: 0x4c40, value: 0x50 },
    RegVal { addr: 0x4c42, value: 0x50 },
    RegVal { addr: 0x4d12, value: 0x1f },
    RegVal { addr: 0x4d13, value: 0x1e },
    RegVal { addr: 0x4d26, value: 0x33 },
    RegVal { addr: 0x4e0e, value: 0x59 },
    RegVal { addr: 0x4e14, value: 0x55 },
    RegVal { addr: 0x4e16, value: 0x59 },
    RegVal { addr: 0x4e1e, value: 0x3b },
    RegVal { addr: 0x4e20, value: 0x47 },
    RegVal { addr: 0x4e22, value: 0x54 },
    RegVal { addr: 0x4e26, value: 0x81 },
    RegVal { addr: 0x4e2c, value: 0x7d },
    RegVal { addr: 0x4e2e, value: 0x81 },
    RegVal { addr: 0x4e36, value: 0x63 },
    RegVal { addr: 0x4e38, value: 0x6f },
    RegVal { addr: 0x4e3a, value: 0x7c },
    RegVal { addr: 0x4f3a, value: 0x3c },
    RegVal { addr: 0x4f3c, value: 0x46 },
    RegVal { addr: 0x4f3e, value: 0x59 },
    RegVal { addr: 0x4f42, value: 0x64 },
    RegVal { addr: 0x4f44, value: 0x6e },
    RegVal { addr: 0x4f46, value: 0x81 },
    RegVal { addr: 0x4f4a, value: 0x82 },
    RegVal { addr: 0x4f5a, value: 0x81 },
    RegVal { addr: 0x4f62, value: 0xaa },
    RegVal { addr: 0x4f72, value: 0xa9 },
    RegVal { addr: 0x4f78, value: 0x36 },
    RegVal { addr: 0x4f7a, value: 0x41 },
    RegVal { addr: 0x4f7c, value: 0x61 },
    RegVal { addr: 0x4f7d, value: 0x01 },
    RegVal { addr: 0x4f7e, value: 0x7c },
    RegVal { addr: 0x4f7f, value: 0x01 },
    RegVal { addr: 0x4f80, value: 0x77 },
    RegVal { addr: 0x4f82, value: 0x7b },
    RegVal { addr: 0x4f88, value: 0x37 },
    RegVal { addr: 0x4f8a, value: 0x40 },
    RegVal { addr: 0x4f8c, value: 0x62 },
    RegVal { addr: 0x4f8d, value: 0x01 },
    RegVal { addr: 0x4f8e, value: 0x76 },
    RegVal { addr: 0x4f8f, value: 0x01 },
    RegVal { addr: 0x4f90, value: 0x5e },
    RegVal { addr: 0x4f91, value: 0x02 },
    RegVal { addr: 0x4f92, value: 0x69 },
    RegVal { addr: 0x4f93, value: 0x02 },
    RegVal { addr: 0x4f94, value: 0x89 },
    RegVal { addr: 0x4f95, value: 0x02 },
    RegVal { addr: 0x4f96, value: 0xa4 },
    RegVal { addr: 0x4f97, value: 0x02 },
    RegVal { addr: 0x4f98, value: 0x9f },
    RegVal { addr: 0x4f99, value: 0x02 },
    RegVal { addr: 0x4f9a, value: 0xa3 },
    RegVal { addr: 0x4f9b, value: 0x02 },
    RegVal { addr: 0x4fa0, value: 0x5f },
    RegVal { addr: 0x4fa1, value: 0x02 },
    RegVal { addr: 0x4fa2, value: 0x68 },
    RegVal { addr: 0x4fa3, value: 0x02 },
    RegVal { addr: 0x4fa4, value: 0x8a },
    RegVal { addr: 0x4fa5, value: 0x02 },
    RegVal { addr: 0x4fa6, value: 0x9e },
    RegVal { addr: 0x4fa7, value: 0x02 },
    RegVal { addr: 0x519e, value: 0x79 },
    RegVal { addr: 0x51a6, value: 0xa1 },
    RegVal { addr: 0x51f0, value: 0xac },
    RegVal { addr: 0x51f2, value: 0xaa },
    RegVal { addr: 0x51f4, value: 0xa5 },
    RegVal { addr: 0x51f6, value: 0xa0 },
    RegVal { addr: 0x5200, value: 0x9b },
    RegVal { addr: 0x5202, value: 0x91 },
    RegVal { addr: 0x5204, value: 0x87 },
    RegVal { addr: 0x5206, value: 0x82 },
    RegVal { addr: 0x5208, value: 0xac },
    RegVal { addr: 0x520a, value: 0xaa },
    RegVal { addr: 0x520c, value: 0xa5 },
    RegVal { addr: 0x520e, value: 0xa0 },
    RegVal { addr: 0x5210, value: 0x9b },
    RegVal { addr: 0x5212, value: 0x91 },
    RegVal { addr: 0x5214, value: 0x87 },
    RegVal { addr: 0x5216, value: 0x82 },
    RegVal { addr: 0x5218, value: 0xac },
    RegVal { addr: 0x521a, value: 0xaa },
    RegVal { addr: 0x521c, value: 0xa5 },
    RegVal { addr: 0x521e, value: 0xa0 },
    RegVal { addr: 0x5220, value: 0x9b },
    RegVal { addr: 0x5222, value: 0x91 },
    RegVal { addr: 0x5224, value: 0x87 },
    RegVal { addr: 0x5226, value: 0x82 },
];
