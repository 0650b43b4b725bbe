// Generated by the font rasterizer from DejaVu Sans Mono, 7x14 pixel cells.
// Do not edit by hand.

Font::new(
    &code_points::CODE_POINT_TABLE,
    7,
    14,
    &[
        0, 2, 37, 56, 91, 132, 169, 207, 224, 266, 307, 331,
        358, 375, 386, 397, 436, 474, 511, 547, 586, 621, 660, 698,
        733, 772, 811, 831, 857, 885, 905, 932, 967, 1006, 1042, 1078,
        1116, 1152, 1189, 1224, 1262, 1299, 1335, 1373, 1410, 1447, 1484, 1521,
        1559, 1594, 1636, 1673, 1712, 1748, 1787, 1823, 1859, 1896, 1932, 1969,
        2011, 2054, 2096, 2114, 2120, 2134, 2166, 2205, 2236, 2273, 2304, 2338,
        2375, 2411, 2447, 2491, 2528, 2564, 2594, 2623, 2654, 2692, 2729, 2756,
        2787, 2822, 2854, 2883, 2912, 2942, 2980, 3009, 3051, 3095, 3137, 3152,
        3169, 3179, 3215, 3251, 3277, 3315, 3350, 3389, 3422, 3461, 3488, 3519,
        3564, 3578, 3591, 3605, 3616, 3628, 3636, 3650, 3660, 3672, 3688, 3700,
        3735, 3771, 3808, 3844, 3876, 3921, 3959, 3998, 4029, 4066, 4099, 4116,
        4141, 4168, 4212,
    ],
    &[
        0xb0, 0x00, 0x87, 0x00, 0x1d, 0x81, 0x01, 0x00, 0x20, 0x2f, 0x00, 0x00, 0xf2, 0x02, 0x00, 0x20,
        0x2f, 0x00, 0x00, 0xf1, 0x01, 0x00, 0x00, 0x0f, 0x00, 0x00, 0x40, 0x00, 0x00, 0x10, 0x16, 0x00,
        0x00, 0xf2, 0x02, 0x8a, 0x00, 0x86, 0x00, 0x0d, 0x10, 0x07, 0x17, 0x00, 0xd2, 0xd0, 0x02, 0x20,
        0x0d, 0x2d, 0x00, 0xa1, 0xa0, 0x01, 0x9b, 0x00, 0x87, 0x00, 0x1d, 0x50, 0x40, 0x01, 0x30, 0x0a,
        0x0d, 0x00, 0x77, 0xb3, 0x50, 0xfd, 0xed, 0xde, 0x00, 0x0d, 0x3a, 0x40, 0xc6, 0xe4, 0x14, 0xc9,
        0xbb, 0x9d, 0x04, 0x3b, 0x77, 0x00, 0xd0, 0xa0, 0x03, 0x8a, 0x00, 0x87, 0x00, 0x23, 0x60, 0x00,
        0x00, 0x40, 0x6b, 0x03, 0x90, 0xaa, 0x86, 0x00, 0x2d, 0x08, 0x00, 0xa0, 0xab, 0x01, 0x00, 0x60,
        0xdc, 0x09, 0x00, 0x80, 0xd0, 0x04, 0x04, 0x08, 0x3d, 0x90, 0xdd, 0x7d, 0x00, 0x00, 0x08, 0x00,
        0x00, 0x60, 0x84, 0x00, 0x86, 0x00, 0x1f, 0x10, 0x01, 0x00, 0x50, 0xcc, 0x05, 0x00, 0x0b, 0xb0,
        0x00, 0x90, 0x66, 0x09, 0x43, 0x71, 0x67, 0x7a, 0x21, 0x98, 0x85, 0x18, 0x12, 0xa0, 0x55, 0x09,
        0x00, 0x1b, 0xb1, 0x00, 0x40, 0xcc, 0x04, 0x89, 0x00, 0x87, 0x00, 0x20, 0x96, 0x07, 0x00, 0xb8,
        0x74, 0x00, 0x90, 0x06, 0x00, 0x00, 0xc5, 0x00, 0x00, 0xb1, 0x8b, 0x00, 0x73, 0x18, 0x5c, 0xb2,
        0x69, 0x30, 0x6e, 0x79, 0x0b, 0x70, 0x3f, 0xb1, 0xbd, 0xbc, 0x08, 0x10, 0x02, 0x87, 0x00, 0x87,
        0x00, 0x00, 0x80, 0x82, 0x00, 0x03, 0x0f, 0x00, 0x00, 0xf0, 0x82, 0x00, 0x00, 0x0b, 0x9c, 0x00,
        0x87, 0x00, 0x20, 0x20, 0x09, 0x00, 0x00, 0x69, 0x00, 0x00, 0xe1, 0x00, 0x00, 0x50, 0x0b, 0x00,
        0x00, 0x98, 0x00, 0x00, 0x90, 0x08, 0x00, 0x00, 0x97, 0x00, 0x00, 0x40, 0x0c, 0x00, 0x00, 0xe0,
        0x01, 0x00, 0x00, 0x78, 0x82, 0x00, 0x00, 0x07, 0x83, 0x00, 0x87, 0x00, 0x23, 0x29, 0x00, 0x00,
        0x60, 0x09, 0x00, 0x00, 0xe0, 0x01, 0x00, 0x00, 0x5b, 0x00, 0x00, 0x90, 0x08, 0x00, 0x00, 0x98,
        0x00, 0x00, 0x90, 0x07, 0x00, 0x00, 0x4c, 0x00, 0x00, 0xe1, 0x00, 0x00, 0x80, 0x08, 0x00, 0x00,
        0x07, 0x84, 0x00, 0x87, 0x00, 0x12, 0x70, 0x00, 0x00, 0x06, 0x0b, 0x06, 0x40, 0xda, 0x4a, 0x00,
        0x92, 0x9e, 0x02, 0x70, 0xb1, 0x71, 0x00, 0x00, 0x08, 0x95, 0x00, 0x8e, 0x00, 0x00, 0x90, 0x82,
        0x00, 0x0a, 0x0f, 0x00, 0x21, 0xf2, 0x22, 0x71, 0xdd, 0xdf, 0x7d, 0x00, 0xf0, 0x82, 0x00, 0x03,
        0x0f, 0x00, 0x00, 0x60, 0x8b, 0x00, 0x9f, 0x00, 0x0b, 0x10, 0x3b, 0x00, 0x00, 0xf3, 0x03, 0x00,
        0x60, 0x0b, 0x00, 0x00, 0x36, 0x84, 0x00, 0x98, 0x00, 0x05, 0x90, 0x99, 0x00, 0x00, 0x44, 0x04,
        0x91, 0x00, 0x9f, 0x00, 0x05, 0x30, 0x3b, 0x00, 0x00, 0xf4, 0x04, 0x8a, 0x00, 0x88, 0x00, 0x21,
        0x80, 0x00, 0x00, 0x60, 0x0a, 0x00, 0x00, 0x3d, 0x00, 0x00, 0xb5, 0x00, 0x00, 0xc0, 0x04, 0x00,
        0x40, 0x0c, 0x00, 0x00, 0x5b, 0x00, 0x00, 0xd3, 0x00, 0x00, 0xa0, 0x06, 0x00, 0x20, 0x0d, 0x00,
        0x00, 0x11, 0x85, 0x00, 0x87, 0x00, 0x20, 0x96, 0x06, 0x00, 0xb8, 0xb5, 0x08, 0xe0, 0x03, 0xe3,
        0x30, 0x0f, 0x00, 0x3f, 0xd4, 0xe2, 0xd2, 0x44, 0x1e, 0x17, 0x4e, 0xf1, 0x01, 0xf1, 0x01, 0x5c,
        0x50, 0x0c, 0x30, 0xbe, 0x3e, 0x00, 0x10, 0x12, 0x87, 0x00, 0x86, 0x00, 0x1f, 0x10, 0x74, 0x04,
        0x00, 0xb9, 0x8d, 0x00, 0x00, 0x90, 0x08, 0x00, 0x00, 0x89, 0x00, 0x00, 0x90, 0x08, 0x00, 0x00,
        0x89, 0x00, 0x00, 0x90, 0x08, 0x00, 0x00, 0x89, 0x00, 0x80, 0xff, 0xff, 0x04, 0x89, 0x00, 0x86,
        0x00, 0x1e, 0x40, 0x98, 0x05, 0x20, 0x7c, 0xd6, 0x08, 0x00, 0x00, 0xe4, 0x00, 0x00, 0x50, 0x0c,
        0x00, 0x10, 0x5d, 0x00, 0x00, 0x8b, 0x00, 0x00, 0x8a, 0x00, 0x00, 0xa9, 0x00, 0x00, 0xf2, 0xff,
        0xff, 0x8a, 0x00, 0x86, 0x00, 0x21, 0x50, 0x98, 0x05, 0x00, 0x6a, 0xc6, 0x09, 0x00, 0x00, 0xd4,
        0x00, 0x00, 0x80, 0x0b, 0x00, 0xfb, 0x2d, 0x00, 0x00, 0x70, 0x0c, 0x00, 0x00, 0xf0, 0x12, 0x01,
        0x50, 0x0f, 0xe3, 0xcc, 0x5e, 0x00, 0x20, 0x02, 0x87, 0x00, 0x87, 0x00, 0x1d, 0x10, 0x38, 0x00,
        0x00, 0xf9, 0x06, 0x00, 0xa4, 0x6d, 0x00, 0xc0, 0xd1, 0x06, 0x80, 0x07, 0x6d, 0x30, 0x0c, 0xd0,
        0x06, 0xe6, 0xdd, 0xef, 0x07, 0x00, 0xd0, 0x06, 0x00, 0x00, 0x6d, 0x8a, 0x00, 0x86, 0x00, 0x21,
        0x70, 0x88, 0x48, 0x00, 0x9d, 0x88, 0x04, 0xd0, 0x04, 0x00, 0x00, 0x9d, 0x58, 0x00, 0x80, 0x76,
        0x8e, 0x00, 0x00, 0x40, 0x0e, 0x00, 0x00, 0xf2, 0x11, 0x01, 0x70, 0x0d, 0xe3, 0xdc, 0x4d, 0x00,
        0x21, 0x02, 0x87, 0x00, 0x87, 0x00, 0x20, 0x94, 0x48, 0x00, 0xe6, 0x67, 0x06, 0xd0, 0x03, 0x00,
        0x20, 0x3e, 0x79, 0x01, 0xe4, 0x6b, 0xca, 0x40, 0x2f, 0x00, 0x3e, 0xf1, 0x00, 0xd0, 0x04, 0x4d,
        0x20, 0x1f, 0x40, 0xbe, 0x7e, 0x00, 0x00, 0x12, 0x87, 0x00, 0x86, 0x00, 0x1d, 0x82, 0x88, 0x88,
        0x21, 0x88, 0x98, 0x0e, 0x00, 0x00, 0x98, 0x00, 0x00, 0xe0, 0x03, 0x00, 0x50, 0x0c, 0x00, 0x00,
        0x7b, 0x00, 0x00, 0xf2, 0x01, 0x00, 0x80, 0x0a, 0x00, 0x00, 0x4d, 0x8b, 0x00, 0x86, 0x00, 0x21,
        0x10, 0x97, 0x17, 0x00, 0xab, 0xa4, 0x0b, 0xf0, 0x02, 0xf2, 0x00, 0x5c, 0x50, 0x0c, 0x30, 0xee,
        0x3e, 0x00, 0x5d, 0x50, 0x0d, 0xe4, 0x00, 0xe0, 0x24, 0x2f, 0x20, 0x2f, 0x80, 0xbe, 0x8e, 0x00,
        0x10, 0x12, 0x87, 0x00, 0x86, 0x00, 0x21, 0x10, 0x98, 0x05, 0x00, 0x9c, 0xc5, 0x08, 0xe3, 0x00,
        0xe3, 0x40, 0x0d, 0x10, 0x2f, 0xf2, 0x02, 0xf5, 0x04, 0xe7, 0xbb, 0x3d, 0x00, 0x21, 0xf1, 0x01,
        0x00, 0x80, 0x0a, 0x90, 0xdc, 0x1c, 0x00, 0x20, 0x02, 0x87, 0x00, 0x91, 0x00, 0x05, 0x40, 0x4f,
        0x00, 0x00, 0xb3, 0x03, 0x87, 0x00, 0x05, 0x30, 0x3b, 0x00, 0x00, 0xf4, 0x04, 0x8a, 0x00, 0x91,
        0x00, 0x05, 0x40, 0x4f, 0x00, 0x00, 0xb3, 0x03, 0x87, 0x00, 0x0b, 0x10, 0x3b, 0x00, 0x00, 0xf3,
        0x03, 0x00, 0x60, 0x0b, 0x00, 0x00, 0x36, 0x84, 0x00, 0x8f, 0x00, 0x12, 0x10, 0x03, 0x00, 0xa4,
        0x5e, 0x71, 0xbd, 0x05, 0x70, 0x6f, 0x00, 0x00, 0x40, 0xda, 0x38, 0x00, 0x00, 0x61, 0x7c, 0x82,
        0x00, 0x00, 0x01, 0x89, 0x00, 0x90, 0x00, 0x07, 0x20, 0x44, 0x44, 0x24, 0xb6, 0xbb, 0xbb, 0x06,
        0x82, 0x00, 0x03, 0xf8, 0xff, 0xff, 0x08, 0x90, 0x00, 0x8d, 0x00, 0x15, 0x13, 0x00, 0x00, 0x50,
        0xae, 0x04, 0x00, 0x00, 0xb5, 0x7d, 0x01, 0x00, 0x60, 0x7f, 0x30, 0xd8, 0x4a, 0x70, 0x6c, 0x01,
        0x00, 0x01, 0x8c, 0x00, 0x86, 0x00, 0x1d, 0x10, 0x97, 0x17, 0x00, 0x88, 0xb6, 0x0a, 0x00, 0x00,
        0xd4, 0x00, 0x00, 0xb1, 0x08, 0x00, 0xb0, 0x08, 0x00, 0x30, 0x0e, 0x00, 0x00, 0xa3, 0x00, 0x00,
        0x10, 0x05, 0x00, 0x00, 0xd4, 0x8b, 0x00, 0x8a, 0x00, 0x21, 0x81, 0xcc, 0x08, 0xc0, 0x06, 0x90,
        0x66, 0x08, 0x84, 0xa5, 0x3b, 0xc4, 0xb6, 0xdb, 0x90, 0x04, 0xb2, 0x0c, 0x59, 0x30, 0xab, 0x33,
        0x8c, 0xbb, 0xa5, 0x20, 0x25, 0x03, 0x9a, 0x02, 0x01, 0x00, 0xb6, 0x9d, 0x83, 0x00, 0x87, 0x00,
        0x1e, 0x82, 0x02, 0x00, 0x70, 0x7e, 0x00, 0x00, 0x7c, 0x0c, 0x00, 0xe2, 0xe0, 0x02, 0x60, 0x0a,
        0x6a, 0x00, 0x7b, 0x82, 0x0b, 0xf1, 0xdd, 0xfd, 0x51, 0x0c, 0x00, 0x5c, 0x89, 0x00, 0x80, 0x09,
        0x89, 0x00, 0x86, 0x00, 0x1e, 0x80, 0x78, 0x05, 0x00, 0x8f, 0xb8, 0x0b, 0xf0, 0x02, 0xf0, 0x02,
        0x2f, 0x40, 0x1e, 0xf0, 0xff, 0x6f, 0x00, 0x2f, 0x30, 0x3e, 0xf0, 0x02, 0xb0, 0x07, 0x2f, 0x20,
        0x5e, 0xf0, 0xdd, 0x8e, 0x8a, 0x00, 0x87, 0x00, 0x20, 0x83, 0x69, 0x00, 0xe4, 0x67, 0x2a, 0xc0,
        0x06, 0x00, 0x10, 0x1f, 0x00, 0x00, 0xf4, 0x00, 0x00, 0x30, 0x0f, 0x00, 0x00, 0xf1, 0x03, 0x00,
        0x00, 0xa9, 0x00, 0x12, 0x10, 0xdb, 0xeb, 0x01, 0x00, 0x21, 0x87, 0x00, 0x86, 0x00, 0x1e, 0x82,
        0x57, 0x01, 0x40, 0x8e, 0xe9, 0x04, 0xd4, 0x00, 0xd5, 0x40, 0x0d, 0x00, 0x3f, 0xd4, 0x00, 0xe0,
        0x44, 0x0d, 0x00, 0x4f, 0xd4, 0x00, 0xf2, 0x41, 0x0d, 0xa1, 0x0a, 0xf4, 0xed, 0x19, 0x8a, 0x00,
        0x86, 0x00, 0x1f, 0x70, 0x88, 0x88, 0x01, 0x9d, 0x88, 0x18, 0xd0, 0x04, 0x00, 0x00, 0x4d, 0x00,
        0x00, 0xd0, 0xff, 0xff, 0x00, 0x4d, 0x00, 0x00, 0xd0, 0x04, 0x00, 0x00, 0x4d, 0x00, 0x00, 0xd0,
        0xff, 0xff, 0x04, 0x89, 0x00, 0x86, 0x00, 0x1d, 0x50, 0x88, 0x88, 0x03, 0xb9, 0x88, 0x38, 0x90,
        0x08, 0x00, 0x00, 0x89, 0x00, 0x00, 0x90, 0xff, 0xff, 0x00, 0x89, 0x00, 0x00, 0x90, 0x08, 0x00,
        0x00, 0x89, 0x00, 0x00, 0x90, 0x08, 0x8b, 0x00, 0x87, 0x00, 0x20, 0x84, 0x48, 0x00, 0xd6, 0x66,
        0x0c, 0xf1, 0x03, 0x00, 0x50, 0x0e, 0x00, 0x00, 0xb6, 0x00, 0x66, 0x61, 0x0c, 0x90, 0x4e, 0xe3,
        0x00, 0xd0, 0x04, 0x6d, 0x00, 0x4d, 0x20, 0xcd, 0xdc, 0x02, 0x00, 0x22, 0x87, 0x00, 0x86, 0x00,
        0x1f, 0x72, 0x00, 0x70, 0x42, 0x0d, 0x00, 0x4d, 0xd4, 0x00, 0xd0, 0x44, 0x0d, 0x00, 0x4d, 0xf4,
        0xff, 0xff, 0x44, 0x0d, 0x00, 0x4d, 0xd4, 0x00, 0xd0, 0x44, 0x0d, 0x00, 0x4d, 0xd4, 0x00, 0xd0,
        0x04, 0x89, 0x00, 0x86, 0x00, 0x1e, 0x70, 0x88, 0x78, 0x00, 0x87, 0x8f, 0x07, 0x00, 0xf2, 0x02,
        0x00, 0x20, 0x2f, 0x00, 0x00, 0xf2, 0x02, 0x00, 0x20, 0x2f, 0x00, 0x00, 0xf2, 0x02, 0x00, 0x20,
        0x2f, 0x00, 0xd0, 0xff, 0xdf, 0x8a, 0x00, 0x87, 0x00, 0x20, 0x87, 0x38, 0x00, 0x70, 0xd8, 0x06,
        0x00, 0x00, 0x6b, 0x00, 0x00, 0xb0, 0x06, 0x00, 0x00, 0x6b, 0x00, 0x00, 0xb0, 0x06, 0x00, 0x00,
        0x6b, 0x30, 0x02, 0xd0, 0x04, 0xe4, 0xdb, 0x0b, 0x00, 0x20, 0x02, 0x87, 0x00, 0x86, 0x00, 0x1f,
        0x72, 0x00, 0x50, 0x45, 0x0d, 0x60, 0x1d, 0xd4, 0x50, 0x1d, 0x40, 0x5d, 0x2d, 0x00, 0xf4, 0xde,
        0x00, 0x40, 0x3f, 0x9b, 0x00, 0xd4, 0x20, 0x4e, 0x40, 0x0d, 0x60, 0x1d, 0xd4, 0x00, 0xc0, 0x09,
        0x89, 0x00, 0x86, 0x00, 0x1f, 0x60, 0x03, 0x00, 0x00, 0x6b, 0x00, 0x00, 0xb0, 0x06, 0x00, 0x00,
        0x6b, 0x00, 0x00, 0xb0, 0x06, 0x00, 0x00, 0x6b, 0x00, 0x00, 0xb0, 0x06, 0x00, 0x00, 0x6b, 0x00,
        0x00, 0xb0, 0xff, 0xff, 0x08, 0x89, 0x00, 0x86, 0x00, 0x1f, 0x84, 0x01, 0x81, 0x84, 0x5e, 0x50,
        0x8e, 0xa8, 0x0a, 0x9a, 0x88, 0xb8, 0xb2, 0x88, 0x88, 0xb7, 0x87, 0x88, 0x28, 0x2f, 0x88, 0x88,
        0x00, 0x80, 0x88, 0x08, 0x00, 0x88, 0x88, 0x00, 0x80, 0x08, 0x89, 0x00, 0x86, 0x00, 0x1f, 0x82,
        0x02, 0x70, 0x42, 0x9f, 0x00, 0x4d, 0xd4, 0x1d, 0xd0, 0x44, 0x8d, 0x07, 0x4d, 0xd4, 0xd2, 0xd0,
        0x44, 0x0d, 0x4a, 0x4d, 0xd4, 0x40, 0xda, 0x44, 0x0d, 0xd0, 0x4e, 0xd4, 0x00, 0xf7, 0x04, 0x89,
        0x00, 0x87, 0x00, 0x20, 0x96, 0x06, 0x00, 0xb9, 0xb6, 0x09, 0xf1, 0x02, 0xf2, 0x41, 0x0e, 0x00,
        0x4e, 0xd5, 0x00, 0xd0, 0x55, 0x0d, 0x00, 0x5d, 0xf3, 0x00, 0xf0, 0x03, 0x4e, 0x40, 0x0e, 0x50,
        0xbe, 0x5e, 0x00, 0x10, 0x12, 0x87, 0x00, 0x86, 0x00, 0x1d, 0x70, 0x88, 0x15, 0x00, 0x9d, 0xb8,
        0x1e, 0xd0, 0x04, 0xd0, 0x07, 0x4d, 0x00, 0x7c, 0xd0, 0x68, 0xe8, 0x02, 0xbd, 0x89, 0x03, 0xd0,
        0x04, 0x00, 0x00, 0x4d, 0x00, 0x00, 0xd0, 0x04, 0x8b, 0x00, 0x87, 0x00, 0x24, 0x96, 0x06, 0x00,
        0xb9, 0xb6, 0x09, 0xf1, 0x02, 0xf2, 0x41, 0x0e, 0x00, 0x4e, 0xd5, 0x00, 0xd0, 0x55, 0x0d, 0x00,
        0x5d, 0xf3, 0x00, 0xf0, 0x03, 0x4e, 0x40, 0x0e, 0x50, 0xbe, 0x5e, 0x00, 0x10, 0xc3, 0x06, 0x00,
        0x00, 0x42, 0x83, 0x00, 0x86, 0x00, 0x1f, 0x82, 0x78, 0x04, 0x40, 0x8f, 0xd8, 0x09, 0xf4, 0x00,
        0xf4, 0x40, 0x0f, 0x40, 0x0f, 0xf4, 0x88, 0x6d, 0x40, 0x8f, 0xd8, 0x02, 0xf4, 0x00, 0xb7, 0x40,
        0x0f, 0x00, 0x4e, 0xf4, 0x00, 0x70, 0x0b, 0x89, 0x00, 0x86, 0x00, 0x21, 0x10, 0x96, 0x38, 0x00,
        0xab, 0x76, 0x09, 0xe3, 0x00, 0x00, 0x20, 0x4f, 0x00, 0x00, 0x70, 0xdf, 0x29, 0x00, 0x10, 0xa4,
        0x0e, 0x00, 0x00, 0xe0, 0x14, 0x03, 0x20, 0x2f, 0xd1, 0xbd, 0x8e, 0x00, 0x20, 0x12, 0x87, 0x00,
        0x86, 0x00, 0x1e, 0x86, 0x88, 0x88, 0x66, 0x88, 0x8f, 0x68, 0x00, 0xf2, 0x02, 0x00, 0x20, 0x2f,
        0x00, 0x00, 0xf2, 0x02, 0x00, 0x20, 0x2f, 0x00, 0x00, 0xf2, 0x02, 0x00, 0x20, 0x2f, 0x00, 0x00,
        0xf2, 0x02, 0x8a, 0x00, 0x86, 0x00, 0x21, 0x81, 0x00, 0x80, 0x21, 0x0f, 0x00, 0x2f, 0xf2, 0x00,
        0xf0, 0x22, 0x0f, 0x00, 0x2f, 0xf2, 0x00, 0xf0, 0x22, 0x0f, 0x00, 0x2f, 0xf2, 0x00, 0xf0, 0x12,
        0x2f, 0x20, 0x1f, 0x60, 0xbe, 0x6e, 0x00, 0x10, 0x12, 0x87, 0x00, 0x86, 0x00, 0x1e, 0x45, 0x00,
        0x40, 0x65, 0x0b, 0x00, 0x6b, 0xf2, 0x01, 0xf1, 0x02, 0x4c, 0x40, 0x0c, 0x80, 0x08, 0x88, 0x00,
        0xc4, 0xc0, 0x04, 0x00, 0x3e, 0x0e, 0x00, 0xa0, 0xaa, 0x00, 0x00, 0xf5, 0x05, 0x8a, 0x00, 0x86,
        0x00, 0x1e, 0x18, 0x00, 0x10, 0xd8, 0x04, 0x00, 0xd4, 0x5b, 0x20, 0x50, 0x8b, 0x47, 0x3f, 0x87,
        0x96, 0xb7, 0x97, 0x46, 0xab, 0xa5, 0x4b, 0xc2, 0x0c, 0xcc, 0x02, 0xae, 0xa0, 0x0e, 0xc0, 0x07,
        0xc7, 0x8a, 0x00, 0x86, 0x00, 0x1f, 0x63, 0x00, 0x50, 0x14, 0x4d, 0x20, 0x2e, 0x50, 0x0d, 0x7a,
        0x00, 0xa0, 0xca, 0x00, 0x00, 0xf4, 0x05, 0x00, 0xa0, 0xbb, 0x00, 0x40, 0x0d, 0x5c, 0x10, 0x4d,
        0x30, 0x1e, 0xa8, 0x00, 0xa0, 0x09, 0x89, 0x00, 0x86, 0x00, 0x1e, 0x45, 0x00, 0x40, 0x45, 0x1e,
        0x10, 0x4e, 0xa0, 0x08, 0xa8, 0x00, 0xe2, 0xe3, 0x02, 0x00, 0xf8, 0x07, 0x00, 0x20, 0x2f, 0x00,
        0x00, 0xf2, 0x02, 0x00, 0x20, 0x2f, 0x00, 0x00, 0xf2, 0x02, 0x8a, 0x00, 0x86, 0x00, 0x1f, 0x80,
        0x88, 0x88, 0x04, 0x88, 0x88, 0x6f, 0x00, 0x00, 0xc7, 0x00, 0x00, 0xe2, 0x02, 0x00, 0xb0, 0x07,
        0x00, 0x60, 0x0c, 0x00, 0x20, 0x2e, 0x00, 0x00, 0x7b, 0x00, 0x00, 0xf2, 0xff, 0xff, 0x09, 0x89,
        0x00, 0x87, 0x00, 0x24, 0xb4, 0x0b, 0x00, 0x60, 0x09, 0x00, 0x00, 0x96, 0x00, 0x00, 0x60, 0x09,
        0x00, 0x00, 0x96, 0x00, 0x00, 0x60, 0x09, 0x00, 0x00, 0x96, 0x00, 0x00, 0x60, 0x09, 0x00, 0x00,
        0x96, 0x00, 0x00, 0x60, 0x4b, 0x00, 0x00, 0x83, 0x08, 0x83, 0x00, 0x86, 0x00, 0x1a, 0x62, 0x00,
        0x00, 0x10, 0x2e, 0x00, 0x00, 0x80, 0x08, 0x00, 0x00, 0xe1, 0x01, 0x00, 0x00, 0x88, 0x00, 0x00,
        0x20, 0x1e, 0x00, 0x00, 0x90, 0x07, 0x00, 0x00, 0xe3, 0x82, 0x00, 0x07, 0x6a, 0x00, 0x00, 0x40,
        0x0d, 0x00, 0x00, 0x20, 0x83, 0x00, 0x87, 0x00, 0x24, 0xbb, 0x04, 0x00, 0x00, 0x69, 0x00, 0x00,
        0x90, 0x06, 0x00, 0x00, 0x69, 0x00, 0x00, 0x90, 0x06, 0x00, 0x00, 0x69, 0x00, 0x00, 0x90, 0x06,
        0x00, 0x00, 0x69, 0x00, 0x00, 0x90, 0x06, 0x00, 0x40, 0x6b, 0x00, 0x00, 0x88, 0x03, 0x83, 0x00,
        0x87, 0x00, 0x0c, 0x81, 0x01, 0x00, 0xb0, 0xbb, 0x00, 0x90, 0x08, 0x98, 0x40, 0x08, 0x00, 0x48,
        0x9b, 0x00, 0xac, 0x00, 0x00, 0x60, 0x82, 0x66, 0x83, 0x00, 0x00, 0x31, 0x82, 0x00, 0x04, 0x4b,
        0x00, 0x00, 0x10, 0x1a, 0xa3, 0x00, 0x8d, 0x00, 0x1a, 0x20, 0x86, 0x04, 0x00, 0x89, 0xb6, 0x09,
        0x00, 0x00, 0xf1, 0x00, 0xd6, 0xdd, 0x0f, 0xe2, 0x01, 0xf1, 0x30, 0x0d, 0x60, 0x0f, 0xb0, 0xbc,
        0xf9, 0x00, 0x20, 0x01, 0x87, 0x00, 0x86, 0x00, 0x21, 0xa0, 0x01, 0x00, 0x00, 0x2d, 0x00, 0x00,
        0xd0, 0x73, 0x06, 0x00, 0xcd, 0xb6, 0x0b, 0xd0, 0x05, 0xe0, 0x02, 0x2d, 0x00, 0x4c, 0xd0, 0x03,
        0xc0, 0x04, 0x7d, 0x20, 0x1f, 0xd0, 0xbb, 0x6d, 0x00, 0x00, 0x12, 0x87, 0x00, 0x8e, 0x00, 0x19,
        0x61, 0x47, 0x00, 0xe3, 0x68, 0x0b, 0xa0, 0x07, 0x00, 0x00, 0x4d, 0x00, 0x00, 0xd0, 0x04, 0x00,
        0x00, 0xa8, 0x00, 0x01, 0x10, 0xdb, 0xdb, 0x00, 0x00, 0x21, 0x87, 0x00, 0x88, 0x00, 0x1f, 0xa1,
        0x00, 0x00, 0x20, 0x0d, 0x00, 0x76, 0xd3, 0x00, 0xbb, 0xc6, 0x0d, 0xe2, 0x00, 0xd5, 0x40, 0x0c,
        0x20, 0x0d, 0xd4, 0x00, 0xd2, 0x10, 0x2e, 0x70, 0x0d, 0x60, 0xbd, 0xdb, 0x00, 0x10, 0x02, 0x87,
        0x00, 0x8e, 0x00, 0x19, 0x74, 0x06, 0x00, 0xc8, 0xa6, 0x0b, 0xe2, 0x01, 0xd0, 0x43, 0xbf, 0xbb,
        0x4e, 0xd4, 0x22, 0x22, 0x11, 0x3e, 0x00, 0x11, 0x40, 0xbd, 0xdc, 0x01, 0x00, 0x22, 0x87, 0x00,
        0x87, 0x00, 0x1c, 0x70, 0xbb, 0x00, 0x10, 0x2e, 0x00, 0x50, 0xe8, 0x66, 0x00, 0x97, 0x8e, 0x08,
        0x00, 0xd4, 0x00, 0x00, 0x40, 0x0d, 0x00, 0x00, 0xd4, 0x00, 0x00, 0x40, 0x0d, 0x00, 0x00, 0xd4,
        0x8b, 0x00, 0x8e, 0x00, 0x21, 0x76, 0x32, 0x00, 0xba, 0xc6, 0x0d, 0xe2, 0x00, 0xd5, 0x40, 0x0c,
        0x20, 0x0d, 0xd4, 0x00, 0xd3, 0x10, 0x3e, 0x80, 0x0d, 0x50, 0xce, 0xd9, 0x00, 0x00, 0x31, 0x0c,
        0x70, 0x66, 0x7c, 0x00, 0x73, 0x48, 0x00, 0x86, 0x00, 0x1e, 0xa0, 0x01, 0x00, 0x00, 0x2d, 0x00,
        0x00, 0xd0, 0x63, 0x16, 0x00, 0xbd, 0xb7, 0x0a, 0xd0, 0x04, 0xe2, 0x00, 0x2d, 0x20, 0x0f, 0xd0,
        0x02, 0xf2, 0x00, 0x2d, 0x20, 0x0f, 0xd0, 0x02, 0xf2, 0x8a, 0x00, 0x87, 0x00, 0x1e, 0xa0, 0x01,
        0x00, 0x00, 0x17, 0x00, 0x30, 0x66, 0x01, 0x00, 0x84, 0x2e, 0x00, 0x00, 0xd0, 0x02, 0x00, 0x00,
        0x2d, 0x00, 0x00, 0xd0, 0x02, 0x00, 0x00, 0x2d, 0x00, 0xb0, 0xfb, 0xbc, 0x03, 0x89, 0x00, 0x87,
        0x00, 0x28, 0x70, 0x06, 0x00, 0x00, 0x45, 0x00, 0x20, 0x66, 0x03, 0x00, 0x83, 0x8c, 0x00, 0x00,
        0x90, 0x08, 0x00, 0x00, 0x89, 0x00, 0x00, 0x90, 0x08, 0x00, 0x00, 0x89, 0x00, 0x00, 0x90, 0x08,
        0x00, 0x00, 0x7a, 0x00, 0x80, 0xe8, 0x02, 0x00, 0x78, 0x03, 0x00, 0x86, 0x00, 0x1f, 0x70, 0x04,
        0x00, 0x00, 0x69, 0x00, 0x00, 0x90, 0x06, 0x50, 0x01, 0x69, 0xa0, 0x08, 0x90, 0xa6, 0x08, 0x00,
        0xe9, 0x4e, 0x00, 0x90, 0x48, 0x1d, 0x00, 0x69, 0x80, 0x0b, 0x90, 0x06, 0xc0, 0x07, 0x89, 0x00,
        0x86, 0x00, 0x1e, 0xd2, 0x8d, 0x00, 0x00, 0x60, 0x09, 0x00, 0x00, 0x96, 0x00, 0x00, 0x60, 0x09,
        0x00, 0x00, 0x96, 0x00, 0x00, 0x60, 0x09, 0x00, 0x00, 0x96, 0x00, 0x00, 0x50, 0x0b, 0x00, 0x00,
        0xb0, 0xbe, 0x8a, 0x00, 0x8d, 0x00, 0x18, 0x42, 0x37, 0x65, 0x60, 0x7d, 0x8e, 0x4c, 0x96, 0xf0,
        0x80, 0x66, 0x09, 0x0f, 0x88, 0x96, 0xf0, 0x80, 0x68, 0x09, 0x0f, 0x88, 0x96, 0xf0, 0x80, 0x08,
        0x89, 0x00, 0x8d, 0x00, 0x17, 0x50, 0x61, 0x16, 0x00, 0xbd, 0xb7, 0x0a, 0xd0, 0x04, 0xe2, 0x00,
        0x2d, 0x20, 0x0f, 0xd0, 0x02, 0xf2, 0x00, 0x2d, 0x20, 0x0f, 0xd0, 0x02, 0xf2, 0x8a, 0x00, 0x8e,
        0x00, 0x19, 0x85, 0x05, 0x00, 0xc9, 0xc6, 0x09, 0xf1, 0x01, 0xf1, 0x31, 0x0d, 0x00, 0x3d, 0xe3,
        0x00, 0xe0, 0x03, 0x3e, 0x30, 0x0e, 0x50, 0xbe, 0x5e, 0x00, 0x10, 0x12, 0x87, 0x00, 0x8d, 0x00,
        0x22, 0x50, 0x72, 0x06, 0x00, 0xcd, 0xb6, 0x0a, 0xd0, 0x05, 0xe0, 0x02, 0x2d, 0x00, 0x4c, 0xd0,
        0x02, 0xd0, 0x04, 0x7d, 0x20, 0x1e, 0xd0, 0xbb, 0x6d, 0x00, 0x2d, 0x12, 0x00, 0xd0, 0x02, 0x00,
        0x00, 0x17, 0x00, 0x00, 0x8e, 0x00, 0x1d, 0x75, 0x41, 0x00, 0xc9, 0xb7, 0x0f, 0xf1, 0x01, 0xf4,
        0x30, 0x0d, 0x10, 0x0f, 0xe3, 0x00, 0xf2, 0x00, 0x3e, 0x60, 0x0f, 0x60, 0xbe, 0xfb, 0x00, 0x10,
        0x03, 0x0f, 0x00, 0x00, 0xf0, 0x82, 0x00, 0x00, 0x08, 0x8e, 0x00, 0x15, 0x16, 0x76, 0x02, 0xf0,
        0x9b, 0x68, 0x00, 0x6f, 0x00, 0x00, 0xf0, 0x02, 0x00, 0x00, 0x2f, 0x00, 0x00, 0xf0, 0x02, 0x00,
        0x00, 0x2f, 0x8b, 0x00, 0x8e, 0x00, 0x19, 0x84, 0x26, 0x00, 0xb8, 0x86, 0x06, 0xb0, 0x05, 0x00,
        0x00, 0xe5, 0x8b, 0x01, 0x00, 0x41, 0xbb, 0x00, 0x01, 0x40, 0x0c, 0xb0, 0xbc, 0x5e, 0x00, 0x10,
        0x12, 0x87, 0x00, 0x87, 0x00, 0x1d, 0x11, 0x00, 0x00, 0x80, 0x08, 0x00, 0x61, 0xaa, 0x56, 0x20,
        0xb8, 0x8b, 0x07, 0x00, 0x88, 0x00, 0x00, 0x80, 0x08, 0x00, 0x00, 0x88, 0x00, 0x00, 0x70, 0x09,
        0x00, 0x00, 0xd2, 0xac, 0x8a, 0x00, 0x8d, 0x00, 0x1a, 0x50, 0x01, 0x61, 0x00, 0x2d, 0x20, 0x0f,
        0xd0, 0x02, 0xf2, 0x00, 0x2d, 0x20, 0x0f, 0xd0, 0x02, 0xf2, 0x00, 0x4c, 0x50, 0x0f, 0x60, 0xbe,
        0xfa, 0x00, 0x10, 0x02, 0x87, 0x00, 0x8d, 0x00, 0x17, 0x42, 0x00, 0x40, 0x22, 0x0e, 0x00, 0x2e,
        0xb0, 0x04, 0xb4, 0x00, 0xa7, 0xa0, 0x07, 0x10, 0x1e, 0x1e, 0x00, 0xb0, 0xb9, 0x00, 0x00, 0xf5,
        0x05, 0x8a, 0x00, 0x8d, 0x00, 0x17, 0x05, 0x00, 0x00, 0xc5, 0x03, 0x00, 0xc3, 0x78, 0x80, 0x70,
        0x58, 0x3a, 0x3e, 0x5a, 0xd1, 0x78, 0xd8, 0x01, 0xbd, 0xb0, 0x0d, 0x90, 0x0a, 0x9a, 0x8a, 0x00,
        0x8d, 0x00, 0x18, 0x51, 0x00, 0x50, 0x01, 0x6b, 0x70, 0x0b, 0x10, 0x6d, 0x1d, 0x00, 0x40, 0x4f,
        0x00, 0x00, 0xca, 0x0a, 0x00, 0xb6, 0xb0, 0x06, 0xd3, 0x02, 0xd2, 0x03, 0x89, 0x00, 0x8d, 0x00,
        0x22, 0x42, 0x00, 0x40, 0x13, 0x1e, 0x00, 0x3d, 0xa0, 0x06, 0xc4, 0x00, 0xb4, 0x90, 0x07, 0x00,
        0x3d, 0x1e, 0x00, 0x80, 0xad, 0x00, 0x00, 0xf2, 0x04, 0x00, 0x30, 0x0d, 0x00, 0x60, 0x7c, 0x00,
        0x00, 0x58, 0x00, 0x00, 0x8d, 0x00, 0x17, 0x40, 0x66, 0x56, 0x00, 0x86, 0xb8, 0x0c, 0x00, 0x10,
        0x3d, 0x00, 0x00, 0x6c, 0x00, 0x00, 0x99, 0x00, 0x00, 0xc6, 0x00, 0x00, 0xd0, 0xde, 0xbd, 0x8a,
        0x00, 0x87, 0x00, 0x15, 0x50, 0x8b, 0x00, 0x00, 0x4e, 0x00, 0x00, 0xf0, 0x02, 0x00, 0x00, 0x2f,
        0x00, 0x00, 0xf2, 0x00, 0x00, 0xfa, 0x07, 0x00, 0x00, 0xe3, 0x82, 0x00, 0x0b, 0x2f, 0x00, 0x00,
        0xf0, 0x02, 0x00, 0x00, 0x3e, 0x00, 0x00, 0x60, 0x8c, 0x83, 0x00, 0x87, 0x00, 0x00, 0xd0, 0x82,
        0x00, 0x03, 0x0f, 0x00, 0x00, 0xf0, 0x82, 0x00, 0x03, 0x0f, 0x00, 0x00, 0xf0, 0x82, 0x00, 0x03,
        0x0f, 0x00, 0x00, 0xf0, 0x82, 0x00, 0x03, 0x0f, 0x00, 0x00, 0xf0, 0x82, 0x00, 0x03, 0x0f, 0x00,
        0x00, 0xf0, 0x82, 0x00, 0x01, 0x0b, 0x00, 0x86, 0x00, 0x24, 0x80, 0x5b, 0x00, 0x00, 0x40, 0x0e,
        0x00, 0x00, 0xf2, 0x00, 0x00, 0x20, 0x0f, 0x00, 0x00, 0xf0, 0x02, 0x00, 0x00, 0xf7, 0x0a, 0x00,
        0xe0, 0x03, 0x00, 0x20, 0x0f, 0x00, 0x00, 0xf2, 0x00, 0x00, 0x30, 0x0e, 0x00, 0x80, 0x6c, 0x84,
        0x00, 0x94, 0x00, 0x09, 0x40, 0x26, 0x00, 0x72, 0x8a, 0xcd, 0x6c, 0x00, 0x00, 0x23, 0x91, 0x00,
        0x87, 0x00, 0x0b, 0x94, 0x04, 0x00, 0xb2, 0xb2, 0x02, 0x40, 0x08, 0x48, 0x00, 0xa0, 0xab, 0x9c,
        0x00, 0x95, 0x00, 0x04, 0xd3, 0x03, 0x00, 0x30, 0x3d, 0x95, 0x00, 0x87, 0x00, 0x1e, 0x85, 0x88,
        0x05, 0xe0, 0xca, 0x58, 0x30, 0x6b, 0x09, 0x00, 0x87, 0x96, 0x00, 0xb0, 0x63, 0xff, 0x16, 0x2e,
        0x97, 0x00, 0xe4, 0xed, 0x09, 0x90, 0x07, 0x96, 0x00, 0x3d, 0x60, 0xff, 0x0b, 0x89, 0x00, 0x86,
        0x00, 0x1e, 0x82, 0x57, 0x01, 0x40, 0x8e, 0xe9, 0x04, 0xd4, 0x00, 0xd5, 0x40, 0x0d, 0x00, 0x2f,
        0xfe, 0x5d, 0xe0, 0x44, 0x0d, 0x00, 0x4f, 0xd4, 0x00, 0xf2, 0x41, 0x0d, 0xa1, 0x0a, 0xf4, 0xed,
        0x19, 0x8a, 0x00, 0x8d, 0x00, 0x14, 0x10, 0x00, 0x10, 0x00, 0x5d, 0x50, 0x0d, 0x20, 0x8d, 0x2d,
        0x00, 0x70, 0x7f, 0x00, 0x50, 0x5d, 0x5d, 0x00, 0x2c, 0x20, 0x0c, 0x8d, 0x00, 0x87, 0x00, 0x20,
        0x96, 0x16, 0x07, 0xb9, 0xb6, 0x3e, 0xf1, 0x02, 0xf6, 0x41, 0x0e, 0xb2, 0x4e, 0xd5, 0xb0, 0xd2,
        0x56, 0x7d, 0x06, 0x5d, 0xe3, 0x0a, 0xf0, 0x13, 0x4f, 0x40, 0x0e, 0x89, 0xbe, 0x5e, 0x30, 0x10,
        0x12, 0x87, 0x00, 0x86, 0x00, 0x1d, 0x70, 0x02, 0x00, 0x00, 0x4d, 0x00, 0x00, 0xd0, 0xde, 0x8d,
        0x00, 0x4d, 0x30, 0x7d, 0xd0, 0x04, 0x90, 0x09, 0x4d, 0x20, 0x7d, 0xd0, 0xff, 0x9d, 0x00, 0x4d,
        0x00, 0x00, 0xd0, 0x04, 0x8b, 0x00, 0x86, 0x00, 0x21, 0x20, 0xba, 0x19, 0x00, 0x8b, 0x82, 0x09,
        0xd0, 0x22, 0xa9, 0x00, 0x2d, 0x3d, 0x00, 0xd0, 0xe2, 0x04, 0x00, 0x2d, 0xe5, 0x07, 0xd0, 0x02,
        0xc1, 0x05, 0x2d, 0x00, 0x79, 0xd0, 0xb7, 0xdb, 0x02, 0x00, 0x22, 0x87, 0x00, 0x8d, 0x00, 0x1b,
        0x61, 0x27, 0x66, 0x40, 0x87, 0x9f, 0x8a, 0x00, 0xe0, 0x21, 0x1b, 0xb8, 0xbf, 0xcc, 0x89, 0xd2,
        0x22, 0xb2, 0x03, 0x2f, 0x10, 0xd6, 0x9c, 0xbd, 0x0a, 0x21, 0x10, 0x02, 0x86, 0x00, 0x86, 0x00,
        0x21, 0x10, 0x4a, 0x34, 0x00, 0xa3, 0x8f, 0x01, 0x20, 0x82, 0x1d, 0x00, 0xe5, 0xda, 0x08, 0xe0,
        0x03, 0xe2, 0x30, 0x0e, 0x00, 0x3e, 0xe3, 0x00, 0xe0, 0x03, 0x3e, 0x30, 0x0e, 0x50, 0xbe, 0x5e,
        0x00, 0x10, 0x12, 0x87, 0x00, 0x8e, 0x00, 0x15, 0x61, 0x01, 0x00, 0x40, 0x4f, 0x00, 0x21, 0x22,
        0x22, 0x71, 0xdd, 0xdd, 0x7d, 0x00, 0x41, 0x01, 0x00, 0x40, 0x4f, 0x00, 0x00, 0x20, 0x8b, 0x00,
        0x8e, 0x00, 0x19, 0x85, 0x35, 0x06, 0xc9, 0xc6, 0x1d, 0xf1, 0x11, 0xfb, 0x31, 0x0d, 0x4a, 0x4d,
        0xe3, 0x67, 0xe0, 0x03, 0x9e, 0x30, 0x0e, 0xb3, 0xbe, 0x5e, 0x40, 0x11, 0x12, 0x87, 0x00, 0x86,
        0x00, 0x29, 0xb0, 0x02, 0x00, 0x00, 0x2d, 0x00, 0x00, 0xd0, 0x73, 0x06, 0x00, 0xcd, 0xb6, 0x0a,
        0xd0, 0x05, 0xe0, 0x02, 0x2d, 0x00, 0x4c, 0xd0, 0x02, 0xd0, 0x04, 0x7d, 0x20, 0x1e, 0xd0, 0xbb,
        0x6d, 0x00, 0x2d, 0x12, 0x00, 0xd0, 0x02, 0x00, 0x00, 0x17, 0x00, 0x00, 0x83, 0x00, 0x00, 0x31,
        0x82, 0x00, 0x04, 0x4b, 0x00, 0x00, 0x10, 0x1a, 0xa3, 0x00, 0x84, 0x00, 0x07, 0x30, 0x01, 0x00,
        0x40, 0x0b, 0x00, 0x10, 0x1a, 0xa3, 0x00, 0x84, 0x00, 0x08, 0x04, 0x00, 0x00, 0xc6, 0x06, 0x00,
        0xa1, 0xa0, 0x01, 0xa2, 0x00, 0x86, 0x00, 0x05, 0x20, 0xac, 0x58, 0x00, 0x44, 0x84, 0xa3, 0x00,
        0x86, 0x00, 0x06, 0x20, 0x99, 0x29, 0x00, 0x41, 0x44, 0x01, 0xa2, 0x00, 0x86, 0x00, 0x82, 0x88,
        0x00, 0x08, 0xa5, 0x00, 0x83, 0x00, 0x08, 0x10, 0x10, 0x00, 0x20, 0x4b, 0x2b, 0x00, 0x40, 0x48,
        0xa3, 0x00, 0x87, 0x00, 0x04, 0xb1, 0x01, 0x00, 0x10, 0x16, 0xa3, 0x00, 0x86, 0x00, 0x06, 0x30,
        0x0b, 0x1b, 0x00, 0x61, 0x60, 0x01, 0xa2, 0x00, 0x0c, 0x00, 0x20, 0x00, 0x00, 0xb0, 0xb8, 0x00,
        0x00, 0x0b, 0x0b, 0x00, 0x80, 0x8a, 0xa3, 0x00, 0xa7, 0x00, 0x08, 0x56, 0x00, 0x00, 0x96, 0x08,
        0x00, 0x20, 0x04, 0x00, 0x86, 0x00, 0x1d, 0x60, 0x88, 0x88, 0x04, 0xab, 0x88, 0x48, 0xb0, 0x06,
        0x00, 0x00, 0x6b, 0x00, 0x00, 0xb0, 0x06, 0x00, 0x00, 0x6b, 0x00, 0x00, 0xb0, 0x06, 0x00, 0x00,
        0x6b, 0x00, 0x00, 0xb0, 0x06, 0x8b, 0x00, 0x87, 0x00, 0x1e, 0x82, 0x02, 0x00, 0x70, 0x7e, 0x00,
        0x00, 0x7c, 0x0c, 0x00, 0xe2, 0xe0, 0x02, 0x60, 0x0a, 0x6a, 0x00, 0x6b, 0x60, 0x0b, 0xf1, 0x02,
        0xf2, 0x51, 0x0c, 0x00, 0x5d, 0xf9, 0xff, 0xff, 0x09, 0x89, 0x00, 0x86, 0x00, 0x1f, 0x83, 0x88,
        0x88, 0x43, 0x8f, 0x88, 0x38, 0x80, 0x0a, 0x00, 0x00, 0xb0, 0x07, 0x00, 0x00, 0xe1, 0x04, 0x00,
        0x40, 0x1d, 0x00, 0x20, 0x2e, 0x00, 0x10, 0x5c, 0x00, 0x00, 0xf6, 0xff, 0xff, 0x06, 0x89, 0x00,
        0x87, 0x00, 0x1e, 0x42, 0x01, 0x00, 0xe6, 0xeb, 0x06, 0xe2, 0x02, 0xe2, 0x62, 0x0a, 0x00, 0x6a,
        0x98, 0x00, 0x90, 0x78, 0x0a, 0x00, 0x7a, 0xe3, 0x00, 0xe0, 0x03, 0x79, 0x70, 0x09, 0xf9, 0x0f,
        0xff, 0x09, 0x89, 0x00, 0x8d, 0x00, 0x1a, 0x10, 0x66, 0x30, 0x12, 0x8d, 0xaa, 0x2b, 0xb6, 0x00,
        0xce, 0x90, 0x08, 0xb0, 0x07, 0x89, 0x00, 0x5c, 0x50, 0x0c, 0xf3, 0x08, 0xb0, 0xdc, 0xd6, 0x08,
        0x20, 0x01, 0x87, 0x00, 0x86, 0x00, 0x29, 0x40, 0xdc, 0x1a, 0x00, 0x7e, 0xb4, 0x09, 0xe2, 0x00,
        0xb4, 0x20, 0x0d, 0xb1, 0x08, 0xd2, 0xf6, 0x5e, 0x20, 0x0d, 0x40, 0x2e, 0xd2, 0x00, 0xb0, 0x26,
        0x6f, 0x20, 0x3e, 0xe2, 0xfe, 0x8f, 0x20, 0x0d, 0x02, 0x00, 0xd2, 0x00, 0x00, 0x10, 0x07, 0x00,
        0x00, 0x8d, 0x00, 0x1d, 0x15, 0x00, 0x40, 0x82, 0x0d, 0x00, 0x2e, 0xa0, 0x05, 0xb5, 0x00, 0xb5,
        0xb0, 0x06, 0x00, 0x3e, 0x0e, 0x00, 0x90, 0x9e, 0x00, 0x00, 0xf4, 0x04, 0x00, 0x00, 0x0f, 0x00,
        0x00, 0xf0, 0x82, 0x00, 0x01, 0x08, 0x00, 0x86, 0x00, 0x21, 0x20, 0xdb, 0x4c, 0x00, 0x9b, 0x22,
        0x02, 0x80, 0x8c, 0x04, 0x00, 0xc9, 0xc6, 0x09, 0xf1, 0x01, 0xf1, 0x31, 0x0d, 0x00, 0x3d, 0xe3,
        0x00, 0xe0, 0x03, 0x3e, 0x30, 0x0e, 0x50, 0xbe, 0x5e, 0x00, 0x10, 0x12, 0x87, 0x00, 0x8e, 0x00,
        0x19, 0x85, 0x47, 0x00, 0xba, 0x88, 0x07, 0xc0, 0x04, 0x00, 0x00, 0xd3, 0xad, 0x00, 0xc0, 0x06,
        0x00, 0x00, 0x2f, 0x00, 0x00, 0x60, 0xce, 0xec, 0x00, 0x00, 0x22, 0x87, 0x00, 0x86, 0x00, 0x1f,
        0x70, 0x2a, 0x00, 0x00, 0x81, 0x0b, 0x00, 0x00, 0xe0, 0x02, 0x00, 0x10, 0x8f, 0x00, 0x00, 0xc8,
        0x0d, 0x00, 0xe1, 0xd2, 0x04, 0x70, 0x0a, 0x97, 0x00, 0x3e, 0x20, 0x1e, 0xb6, 0x00, 0xb0, 0x06,
        0x89, 0x00, 0x8d, 0x00, 0x1b, 0x63, 0x66, 0x66, 0x63, 0xce, 0xcb, 0x6e, 0xb0, 0x04, 0xb4, 0x00,
        0x4b, 0x40, 0x0b, 0xb0, 0x04, 0xb4, 0x00, 0x4b, 0x40, 0x0b, 0xb0, 0x04, 0xe2, 0x07, 0x00, 0x00,
        0x23, 0x86, 0x00, 0x96, 0x00, 0x0b, 0x85, 0x60, 0x99, 0x99, 0x7e, 0x42, 0x44, 0xd4, 0x04, 0x00,
        0x40, 0x04, 0x8d, 0x00, 0x92, 0x00, 0x13, 0x83, 0x7d, 0x93, 0xbd, 0x37, 0x60, 0xaf, 0x15, 0x00,
        0x00, 0xa5, 0xbe, 0x04, 0x00, 0x00, 0x44, 0xf8, 0xff, 0xff, 0x08, 0x89, 0x00, 0x90, 0x00, 0x15,
        0x70, 0x8d, 0x03, 0x00, 0x30, 0xb7, 0x9d, 0x03, 0x10, 0xa5, 0x6f, 0xb4, 0xae, 0x05, 0x40, 0x04,
        0x00, 0x00, 0xf8, 0xff, 0xff, 0x08, 0x89, 0x00, 0x28, 0x00, 0x10, 0x00, 0x00, 0x60, 0x5f, 0x00,
        0x60, 0x69, 0x58, 0x60, 0x68, 0x59, 0x63, 0xf8, 0xff, 0x0d, 0x88, 0xff, 0x5f, 0x86, 0xf8, 0x6f,
        0xf5, 0x88, 0xff, 0xe0, 0x8f, 0xf8, 0x4f, 0xff, 0x48, 0xee, 0xe9, 0x3e, 0x40, 0x0c, 0x4c, 0x00,
        0x20, 0x2c, 0x87, 0x00,
    ],
)
