// Generated by the font rasterizer from DejaVu Sans Mono, 10x18 pixel cells.
// Do not edit by hand.

Font::new(
    &code_points::CODE_POINT_TABLE,
    10,
    18,
    &[
        0, 2, 48, 76, 137, 211, 275, 341, 363, 436, 509, 549,
        591, 616, 629, 643, 706, 773, 837, 904, 970, 1032, 1095, 1162,
        1225, 1292, 1359, 1385, 1422, 1467, 1495, 1540, 1601, 1673, 1737, 1801,
        1867, 1930, 1995, 2049, 2116, 2181, 2239, 2295, 2360, 2414, 2479, 2544,
        2611, 2673, 2749, 2814, 2881, 2935, 2999, 3062, 3126, 3191, 3249, 3314,
        3392, 3456, 3534, 3563, 3571, 3587, 3641, 3710, 3761, 3828, 3880, 3939,
        4006, 4076, 4136, 4217, 4283, 4352, 4407, 4461, 4514, 4580, 4647, 4699,
        4750, 4814, 4868, 4921, 4975, 5030, 5098, 5151, 5220, 5286, 5355, 5375,
        5407, 5425, 5489, 5552, 5592, 5659, 5721, 5789, 5843, 5911, 5953, 6006,
        6088, 6104, 6120, 6137, 6155, 6168, 6183, 6201, 6215, 6233, 6260, 6280,
        6331, 6395, 6458, 6522, 6576, 6657, 6722, 6790, 6843, 6909, 6964, 6994,
        7040, 7089, 7170,
    ],
    &[
        0xd9, 0x00, 0x90, 0x00, 0x00, 0xaa, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00,
        0x00, 0xbb, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0xaa, 0x83, 0x00,
        0x00, 0x77, 0x88, 0x00, 0x00, 0x77, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0x44, 0x90, 0x00,
        0x8f, 0x00, 0x16, 0xd2, 0x33, 0x2d, 0x00, 0x00, 0xf2, 0x44, 0x2f, 0x00, 0x00, 0xf2, 0x44, 0x2f,
        0x00, 0x00, 0xf2, 0x44, 0x2f, 0x00, 0x00, 0x40, 0x11, 0x04, 0xb2, 0x00, 0x90, 0x00, 0x37, 0x59,
        0x80, 0x05, 0x00, 0x00, 0x3f, 0xe0, 0x04, 0x00, 0x40, 0x0e, 0xf3, 0x00, 0x70, 0xc9, 0x9e, 0xeb,
        0x69, 0x60, 0xe8, 0x8b, 0xbd, 0x58, 0x00, 0xf0, 0x03, 0x4e, 0x00, 0x00, 0xe4, 0x30, 0x0f, 0x00,
        0xd8, 0xfe, 0xed, 0xdf, 0x0a, 0x42, 0x8d, 0xc4, 0x49, 0x03, 0x00, 0x3f, 0xe0, 0x04, 0x00, 0x40,
        0x0e, 0xf3, 0x00, 0x00, 0x20, 0x04, 0x52, 0x90, 0x00, 0x8b, 0x00, 0x00, 0x41, 0x83, 0x00, 0x00,
        0x92, 0x82, 0x00, 0x10, 0x50, 0xd9, 0x58, 0x00, 0x00, 0xda, 0xc8, 0xd9, 0x00, 0x20, 0x4f, 0x92,
        0x00, 0x00, 0x30, 0x4f, 0x92, 0x82, 0x00, 0x20, 0xeb, 0xb9, 0x02, 0x00, 0x00, 0x71, 0xfc, 0xaf,
        0x01, 0x00, 0x00, 0x92, 0xe4, 0x08, 0x00, 0x00, 0x92, 0xa0, 0x0b, 0x20, 0x05, 0x92, 0xd1, 0x08,
        0x30, 0xee, 0xec, 0xbe, 0x01, 0x00, 0x30, 0xb8, 0x03, 0x82, 0x00, 0x00, 0x94, 0x83, 0x00, 0x00,
        0x61, 0x86, 0x00, 0x8e, 0x00, 0x36, 0x10, 0x66, 0x01, 0x00, 0x00, 0xd1, 0xbb, 0x1d, 0x00, 0x00,
        0xb5, 0x00, 0x5b, 0x00, 0x00, 0xb5, 0x00, 0x5b, 0x00, 0x00, 0xc0, 0xbb, 0x0c, 0x82, 0x1c, 0x00,
        0x55, 0xb5, 0x5b, 0x00, 0x10, 0xc7, 0x38, 0x66, 0x01, 0x90, 0x05, 0xd1, 0xaa, 0x0d, 0x00, 0x00,
        0xa5, 0x00, 0x5b, 0x00, 0x00, 0xb5, 0x00, 0x5b, 0x00, 0x00, 0xc0, 0xcc, 0x0b, 0x82, 0x00, 0x00,
        0x45, 0x8f, 0x00, 0x8b, 0x00, 0x00, 0x11, 0x82, 0x00, 0x0a, 0xd2, 0xff, 0x0d, 0x00, 0x00, 0xcb,
        0x12, 0x06, 0x00, 0x00, 0x8d, 0x83, 0x00, 0x00, 0xca, 0x83, 0x00, 0x26, 0xf6, 0x07, 0x00, 0x00,
        0x40, 0x8e, 0x4f, 0x00, 0x25, 0xe0, 0x07, 0xd9, 0x01, 0x6b, 0xf3, 0x02, 0xc1, 0x0b, 0x4e, 0xf3,
        0x03, 0x30, 0xaf, 0x0e, 0xd0, 0x0b, 0x00, 0xf8, 0x07, 0x40, 0xde, 0xb9, 0xce, 0x1d, 0x00, 0x71,
        0x79, 0x12, 0x36, 0x8e, 0x00, 0x90, 0x00, 0x00, 0x88, 0x83, 0x00, 0x00, 0x99, 0x83, 0x00, 0x00,
        0x99, 0x83, 0x00, 0x00, 0x99, 0x83, 0x00, 0x00, 0x22, 0xb3, 0x00, 0x8b, 0x00, 0x01, 0x20, 0x05,
        0x82, 0x00, 0x01, 0xb0, 0x08, 0x82, 0x00, 0x01, 0xf4, 0x01, 0x82, 0x00, 0x00, 0xba, 0x83, 0x00,
        0x00, 0x6f, 0x82, 0x00, 0x01, 0x40, 0x3f, 0x82, 0x00, 0x01, 0x60, 0x1f, 0x82, 0x00, 0x01, 0x60,
        0x0f, 0x82, 0x00, 0x01, 0x60, 0x1f, 0x82, 0x00, 0x01, 0x40, 0x3f, 0x83, 0x00, 0x00, 0x6f, 0x83,
        0x00, 0x00, 0xba, 0x83, 0x00, 0x01, 0xf4, 0x01, 0x82, 0x00, 0x01, 0xb0, 0x08, 0x82, 0x00, 0x01,
        0x20, 0x05, 0x85, 0x00, 0x8a, 0x00, 0x01, 0x50, 0x02, 0x82, 0x00, 0x01, 0x80, 0x0b, 0x82, 0x00,
        0x01, 0x10, 0x4f, 0x83, 0x00, 0x00, 0xab, 0x83, 0x00, 0x00, 0xf6, 0x83, 0x00, 0x01, 0xf3, 0x04,
        0x82, 0x00, 0x01, 0xf1, 0x06, 0x82, 0x00, 0x01, 0xf0, 0x06, 0x82, 0x00, 0x01, 0xf1, 0x06, 0x82,
        0x00, 0x01, 0xf3, 0x04, 0x82, 0x00, 0x00, 0xf6, 0x83, 0x00, 0x00, 0xab, 0x82, 0x00, 0x01, 0x20,
        0x4f, 0x82, 0x00, 0x01, 0x80, 0x0b, 0x82, 0x00, 0x01, 0x50, 0x02, 0x86, 0x00, 0x8b, 0x00, 0x00,
        0x11, 0x83, 0x00, 0x1e, 0x66, 0x00, 0x00, 0x20, 0x08, 0x66, 0x80, 0x02, 0x00, 0xc7, 0xaa, 0x7c,
        0x00, 0x00, 0x40, 0xee, 0x04, 0x00, 0x10, 0xb9, 0x88, 0x9b, 0x01, 0x10, 0x05, 0x66, 0x50, 0x01,
        0x00, 0x00, 0x55, 0xa9, 0x00, 0x9a, 0x00, 0x00, 0x55, 0x83, 0x00, 0x00, 0x99, 0x83, 0x00, 0x08,
        0x99, 0x00, 0x00, 0x20, 0x22, 0xaa, 0x22, 0x02, 0xf0, 0x82, 0xff, 0x08, 0x0f, 0x20, 0x22, 0xaa,
        0x22, 0x02, 0x00, 0x00, 0x99, 0x83, 0x00, 0x00, 0x99, 0x83, 0x00, 0x00, 0x55, 0x95, 0x00, 0xbd,
        0x00, 0x00, 0xdb, 0x83, 0x00, 0x00, 0xfd, 0x82, 0x00, 0x01, 0x10, 0x9f, 0x82, 0x00, 0x01, 0x50,
        0x1f, 0x82, 0x00, 0x01, 0x40, 0x05, 0x86, 0x00, 0xad, 0x00, 0x07, 0x80, 0x88, 0x08, 0x00, 0x00,
        0xb0, 0xbb, 0x0b, 0xa3, 0x00, 0xbd, 0x00, 0x00, 0xff, 0x83, 0x00, 0x00, 0xff, 0x83, 0x00, 0x00,
        0x66, 0x90, 0x00, 0x91, 0x00, 0x01, 0xd2, 0x04, 0x82, 0x00, 0x00, 0xc9, 0x82, 0x00, 0x01, 0x10,
        0x6f, 0x82, 0x00, 0x01, 0x80, 0x0d, 0x82, 0x00, 0x01, 0xe1, 0x07, 0x82, 0x00, 0x00, 0xe7, 0x83,
        0x00, 0x00, 0x8e, 0x82, 0x00, 0x01, 0x60, 0x1f, 0x82, 0x00, 0x01, 0xd0, 0x08, 0x82, 0x00, 0x01,
        0xf5, 0x02, 0x82, 0x00, 0x00, 0x9c, 0x82, 0x00, 0x01, 0x40, 0x3f, 0x82, 0x00, 0x01, 0x80, 0x08,
        0x8c, 0x00, 0x8b, 0x00, 0x00, 0x11, 0x82, 0x00, 0x39, 0xc2, 0xff, 0x1b, 0x00, 0x00, 0xdc, 0x33,
        0xcd, 0x00, 0x40, 0x5f, 0x00, 0xf5, 0x04, 0x70, 0x1f, 0x00, 0xf1, 0x07, 0x90, 0x0e, 0x23, 0xe0,
        0x09, 0x90, 0x0d, 0xee, 0xd0, 0x09, 0x90, 0x0d, 0x78, 0xd0, 0x09, 0x80, 0x0f, 0x00, 0xf0, 0x08,
        0x50, 0x3f, 0x00, 0xf3, 0x05, 0x10, 0x9f, 0x00, 0xe9, 0x01, 0x00, 0xf6, 0xbb, 0x6f, 0x00, 0x00,
        0x30, 0x88, 0x03, 0x8f, 0x00, 0x8f, 0x00, 0x07, 0xa5, 0xdd, 0x03, 0x00, 0x00, 0xbb, 0xfa, 0x04,
        0x82, 0x00, 0x01, 0xf4, 0x04, 0x82, 0x00, 0x01, 0xf4, 0x04, 0x82, 0x00, 0x01, 0xf4, 0x04, 0x82,
        0x00, 0x01, 0xf4, 0x04, 0x82, 0x00, 0x01, 0xf4, 0x04, 0x82, 0x00, 0x01, 0xf4, 0x04, 0x82, 0x00,
        0x01, 0xf4, 0x04, 0x82, 0x00, 0x0c, 0xf4, 0x04, 0x00, 0x00, 0xd8, 0xfe, 0xde, 0x08, 0x00, 0x64,
        0x66, 0x66, 0x04, 0x8e, 0x00, 0x8b, 0x00, 0x0b, 0x12, 0x00, 0x00, 0x30, 0xfb, 0xff, 0x2b, 0x00,
        0x60, 0x5a, 0x52, 0xce, 0x83, 0x00, 0x01, 0xf6, 0x03, 0x82, 0x00, 0x01, 0xf5, 0x03, 0x82, 0x00,
        0x00, 0xea, 0x82, 0x00, 0x01, 0x50, 0x5f, 0x82, 0x00, 0x05, 0xe4, 0x08, 0x00, 0x00, 0x20, 0x8e,
        0x82, 0x00, 0x05, 0xe2, 0x0a, 0x00, 0x00, 0x10, 0xad, 0x82, 0x00, 0x05, 0x80, 0xdf, 0xdd, 0xdd,
        0x05, 0x30, 0x82, 0x66, 0x00, 0x02, 0x8e, 0x00, 0x8b, 0x00, 0x0b, 0x12, 0x00, 0x00, 0x30, 0xfc,
        0xff, 0x2b, 0x00, 0x30, 0x48, 0x42, 0xdd, 0x83, 0x00, 0x01, 0xf5, 0x03, 0x82, 0x00, 0x0a, 0xf6,
        0x02, 0x00, 0x20, 0x74, 0x9e, 0x00, 0x00, 0x90, 0xff, 0x2c, 0x82, 0x00, 0x02, 0x20, 0xeb, 0x01,
        0x82, 0x00, 0x01, 0xf2, 0x06, 0x82, 0x00, 0x0f, 0xf1, 0x07, 0x30, 0x01, 0x00, 0xf8, 0x04, 0x90,
        0xcf, 0xdb, 0x9f, 0x00, 0x10, 0x85, 0x79, 0x03, 0x8f, 0x00, 0x90, 0x00, 0x01, 0x90, 0x5d, 0x82,
        0x00, 0x01, 0xe4, 0x6f, 0x82, 0x00, 0x24, 0x6d, 0x6f, 0x00, 0x00, 0x80, 0x2a, 0x6f, 0x00, 0x00,
        0xe3, 0x22, 0x6f, 0x00, 0x00, 0x7c, 0x20, 0x6f, 0x00, 0x60, 0x0d, 0x20, 0x6f, 0x00, 0xd0, 0x9c,
        0xa9, 0xbf, 0x08, 0x80, 0x99, 0xa9, 0xbf, 0x08, 0x00, 0x00, 0x20, 0x6f, 0x82, 0x00, 0x01, 0x20,
        0x6f, 0x82, 0x00, 0x01, 0x10, 0x26, 0x8f, 0x00, 0x8e, 0x00, 0x0b, 0x20, 0xdd, 0xdd, 0x8d, 0x00,
        0x20, 0x8f, 0x66, 0x46, 0x00, 0x20, 0x4f, 0x82, 0x00, 0x0d, 0x20, 0x4f, 0x02, 0x00, 0x00, 0x20,
        0xff, 0xff, 0x1a, 0x00, 0x10, 0x47, 0x73, 0xce, 0x83, 0x00, 0x01, 0xf6, 0x04, 0x82, 0x00, 0x01,
        0xf2, 0x06, 0x82, 0x00, 0x0f, 0xf3, 0x05, 0x30, 0x00, 0x00, 0xfb, 0x01, 0x90, 0xce, 0xeb, 0x5f,
        0x00, 0x20, 0x86, 0x79, 0x02, 0x8f, 0x00, 0x8b, 0x00, 0x0e, 0x20, 0x01, 0x00, 0x00, 0x80, 0xff,
        0xbf, 0x00, 0x00, 0xe9, 0x26, 0x74, 0x00, 0x20, 0x6f, 0x82, 0x00, 0x2b, 0x70, 0x0e, 0x10, 0x00,
        0x00, 0x90, 0x7c, 0xff, 0x5d, 0x00, 0x90, 0xce, 0x23, 0xfa, 0x03, 0x90, 0x3f, 0x00, 0xf1, 0x08,
        0x80, 0x0f, 0x00, 0xd0, 0x09, 0x60, 0x1f, 0x00, 0xe0, 0x09, 0x10, 0x8f, 0x00, 0xf4, 0x05, 0x00,
        0xf6, 0xab, 0xbf, 0x00, 0x00, 0x40, 0x88, 0x05, 0x8f, 0x00, 0x8e, 0x00, 0x00, 0x80, 0x82, 0xdd,
        0x05, 0x06, 0x40, 0x66, 0x66, 0xf9, 0x03, 0x82, 0x00, 0x00, 0xca, 0x82, 0x00, 0x01, 0x10, 0x7f,
        0x82, 0x00, 0x01, 0x70, 0x1f, 0x82, 0x00, 0x01, 0xc0, 0x0a, 0x82, 0x00, 0x01, 0xf3, 0x04, 0x82,
        0x00, 0x00, 0xe9, 0x82, 0x00, 0x01, 0x10, 0x8f, 0x82, 0x00, 0x01, 0x60, 0x2f, 0x82, 0x00, 0x01,
        0xc0, 0x0c, 0x82, 0x00, 0x01, 0x60, 0x03, 0x90, 0x00, 0x8b, 0x00, 0x00, 0x11, 0x82, 0x00, 0x39,
        0xd4, 0xff, 0x4d, 0x00, 0x20, 0xaf, 0x22, 0xfa, 0x02, 0x60, 0x2f, 0x00, 0xf2, 0x06, 0x40, 0x3f,
        0x00, 0xf3, 0x04, 0x00, 0xbb, 0x44, 0xbb, 0x00, 0x00, 0xd3, 0xff, 0x3d, 0x00, 0x30, 0x8e, 0x11,
        0xe9, 0x03, 0x90, 0x0e, 0x00, 0xe0, 0x09, 0x90, 0x0d, 0x00, 0xd0, 0x09, 0x70, 0x4f, 0x00, 0xf3,
        0x07, 0x10, 0xfc, 0xaa, 0xcf, 0x01, 0x00, 0x50, 0x88, 0x05, 0x8f, 0x00, 0x8b, 0x00, 0x00, 0x12,
        0x82, 0x00, 0x26, 0xe5, 0xff, 0x1b, 0x00, 0x30, 0x9f, 0x32, 0xcd, 0x00, 0x90, 0x0e, 0x00, 0xf4,
        0x03, 0xa0, 0x0c, 0x00, 0xf2, 0x07, 0x90, 0x0d, 0x00, 0xf2, 0x08, 0x60, 0x3f, 0x00, 0xf8, 0x09,
        0x00, 0xfb, 0xba, 0xdc, 0x09, 0x00, 0x50, 0x68, 0xe1, 0x07, 0x82, 0x00, 0x0f, 0xf3, 0x04, 0x00,
        0x01, 0x10, 0xdc, 0x00, 0x00, 0xcd, 0xeb, 0x3e, 0x00, 0x00, 0x74, 0x68, 0x01, 0x8f, 0x00, 0x9f,
        0x00, 0x00, 0x99, 0x83, 0x00, 0x00, 0xff, 0x83, 0x00, 0x00, 0x99, 0x92, 0x00, 0x00, 0xff, 0x83,
        0x00, 0x00, 0xff, 0x83, 0x00, 0x00, 0x66, 0x90, 0x00, 0x9f, 0x00, 0x00, 0x99, 0x83, 0x00, 0x00,
        0xff, 0x83, 0x00, 0x00, 0x99, 0x92, 0x00, 0x00, 0xdb, 0x83, 0x00, 0x00, 0xfd, 0x82, 0x00, 0x01,
        0x10, 0x9f, 0x82, 0x00, 0x01, 0x50, 0x1f, 0x82, 0x00, 0x01, 0x40, 0x05, 0x86, 0x00, 0x9c, 0x00,
        0x00, 0x01, 0x82, 0x00, 0x0d, 0xa4, 0x0f, 0x00, 0x20, 0xd8, 0xaf, 0x04, 0x50, 0xfb, 0x6c, 0x01,
        0x00, 0xf0, 0x5e, 0x82, 0x00, 0x09, 0x50, 0xfb, 0x6b, 0x01, 0x00, 0x00, 0x20, 0xd8, 0xaf, 0x04,
        0x82, 0x00, 0x01, 0xb4, 0x0f, 0x83, 0x00, 0x00, 0x02, 0x93, 0x00, 0xa2, 0x00, 0x00, 0x90, 0x82,
        0x99, 0x01, 0x09, 0x90, 0x82, 0x99, 0x00, 0x09, 0x84, 0x00, 0x00, 0x90, 0x82, 0x99, 0x01, 0x09,
        0xb0, 0x82, 0xbb, 0x00, 0x0b, 0x9d, 0x00, 0x98, 0x00, 0x00, 0x10, 0x83, 0x00, 0x01, 0xf0, 0x4a,
        0x82, 0x00, 0x09, 0x40, 0xfa, 0x8d, 0x02, 0x00, 0x00, 0x10, 0xc6, 0xbf, 0x05, 0x82, 0x00, 0x0d,
        0xe5, 0x0f, 0x00, 0x10, 0xb6, 0xbf, 0x05, 0x40, 0xfa, 0x8d, 0x02, 0x00, 0xf0, 0x4b, 0x82, 0x00,
        0x00, 0x20, 0x97, 0x00, 0x8b, 0x00, 0x00, 0x21, 0x82, 0x00, 0x08, 0xd6, 0xff, 0x4d, 0x00, 0x00,
        0x6b, 0x32, 0xec, 0x01, 0x82, 0x00, 0x01, 0xf6, 0x03, 0x82, 0x00, 0x05, 0xea, 0x01, 0x00, 0x00,
        0x80, 0x4f, 0x82, 0x00, 0x01, 0xf7, 0x05, 0x82, 0x00, 0x00, 0x9d, 0x83, 0x00, 0x00, 0x8d, 0x83,
        0x00, 0x00, 0x35, 0x83, 0x00, 0x00, 0x59, 0x83, 0x00, 0x00, 0x8f, 0x83, 0x00, 0x00, 0x36, 0x90,
        0x00, 0x90, 0x00, 0x36, 0x21, 0x01, 0x00, 0x00, 0xa1, 0xdf, 0xbf, 0x01, 0x10, 0x9d, 0x01, 0xa0,
        0x0b, 0x90, 0x0a, 0x00, 0x10, 0x2f, 0xf1, 0x02, 0xd5, 0xaf, 0x4d, 0xd4, 0x20, 0x6f, 0x82, 0x4f,
        0xb6, 0x70, 0x0b, 0x00, 0x4e, 0xa7, 0x80, 0x0a, 0x00, 0x4d, 0xc5, 0x50, 0x1e, 0x20, 0x4f, 0xf3,
        0x00, 0xdb, 0xd9, 0x4e, 0xc0, 0x07, 0x60, 0x37, 0x15, 0x40, 0x4e, 0x83, 0x00, 0x08, 0xe5, 0x6a,
        0x76, 0x00, 0x00, 0x10, 0xb7, 0x9b, 0x01, 0x84, 0x00, 0x8f, 0x00, 0x3a, 0x10, 0xdd, 0x01, 0x00,
        0x00, 0x50, 0xee, 0x05, 0x00, 0x00, 0xa0, 0xbb, 0x0a, 0x00, 0x00, 0xe0, 0x66, 0x0e, 0x00, 0x00,
        0xf4, 0x22, 0x4f, 0x00, 0x00, 0xd9, 0x00, 0x9d, 0x00, 0x00, 0x9d, 0x00, 0xd9, 0x00, 0x30, 0xdf,
        0xbb, 0xfd, 0x03, 0x80, 0x6f, 0x66, 0xf6, 0x08, 0xc0, 0x0b, 0x00, 0xb0, 0x0c, 0xf2, 0x07, 0x00,
        0x70, 0x2f, 0x62, 0x01, 0x00, 0x10, 0x26, 0x8e, 0x00, 0x8e, 0x00, 0x3a, 0x50, 0xdd, 0xdd, 0x4b,
        0x00, 0x60, 0x7f, 0x66, 0xfb, 0x03, 0x60, 0x2f, 0x00, 0xf1, 0x07, 0x60, 0x2f, 0x00, 0xf1, 0x07,
        0x60, 0x5f, 0x54, 0xeb, 0x02, 0x60, 0xff, 0xff, 0x7e, 0x00, 0x60, 0x2f, 0x00, 0xf5, 0x07, 0x60,
        0x2f, 0x00, 0xa0, 0x0d, 0x60, 0x2f, 0x00, 0xa0, 0x0d, 0x60, 0x2f, 0x00, 0xe3, 0x0b, 0x60, 0xdf,
        0xed, 0xcf, 0x02, 0x20, 0x66, 0x56, 0x03, 0x8f, 0x00, 0x8b, 0x00, 0x0e, 0x20, 0x01, 0x00, 0x00,
        0x60, 0xfd, 0xdf, 0x05, 0x00, 0xf7, 0x28, 0x73, 0x07, 0x10, 0x9f, 0x82, 0x00, 0x01, 0x50, 0x3f,
        0x82, 0x00, 0x01, 0x80, 0x1f, 0x82, 0x00, 0x01, 0x90, 0x0f, 0x82, 0x00, 0x01, 0x90, 0x0f, 0x82,
        0x00, 0x01, 0x70, 0x2f, 0x82, 0x00, 0x01, 0x30, 0x6f, 0x83, 0x00, 0x0c, 0xdb, 0x02, 0x10, 0x04,
        0x00, 0xc1, 0xbf, 0xeb, 0x08, 0x00, 0x00, 0x85, 0x58, 0x8f, 0x00, 0x8e, 0x00, 0x39, 0x80, 0xdd,
        0xad, 0x04, 0x00, 0x90, 0x6e, 0xa6, 0x7f, 0x00, 0x90, 0x0d, 0x00, 0xf8, 0x02, 0x90, 0x0d, 0x00,
        0xf2, 0x07, 0x90, 0x0d, 0x00, 0xf0, 0x09, 0x90, 0x0d, 0x00, 0xd0, 0x0b, 0x90, 0x0d, 0x00, 0xe0,
        0x09, 0x90, 0x0d, 0x00, 0xf1, 0x08, 0x90, 0x0d, 0x00, 0xf5, 0x04, 0x90, 0x0d, 0x40, 0xce, 0x00,
        0x90, 0xdf, 0xfe, 0x1b, 0x00, 0x40, 0x66, 0x25, 0x90, 0x00, 0x8e, 0x00, 0x00, 0x20, 0x82, 0xdd,
        0x07, 0x07, 0x20, 0x9f, 0x66, 0x66, 0x03, 0x20, 0x6f, 0x82, 0x00, 0x01, 0x20, 0x6f, 0x82, 0x00,
        0x05, 0x20, 0x8f, 0x44, 0x44, 0x01, 0x20, 0x82, 0xff, 0x02, 0x04, 0x20, 0x6f, 0x82, 0x00, 0x01,
        0x20, 0x6f, 0x82, 0x00, 0x01, 0x20, 0x6f, 0x82, 0x00, 0x01, 0x20, 0x6f, 0x82, 0x00, 0x05, 0x20,
        0xef, 0xdd, 0xdd, 0x08, 0x10, 0x82, 0x66, 0x00, 0x04, 0x8e, 0x00, 0x8f, 0x00, 0x0a, 0xdb, 0xdd,
        0xdd, 0x0a, 0x00, 0xbd, 0x66, 0x66, 0x04, 0x00, 0x9d, 0x83, 0x00, 0x00, 0x9d, 0x83, 0x00, 0x0a,
        0xbd, 0x66, 0x66, 0x01, 0x00, 0xfd, 0xff, 0xff, 0x04, 0x00, 0x9d, 0x83, 0x00, 0x00, 0x9d, 0x83,
        0x00, 0x00, 0x9d, 0x83, 0x00, 0x00, 0x9d, 0x83, 0x00, 0x00, 0x9d, 0x83, 0x00, 0x00, 0x45, 0x91,
        0x00, 0x8b, 0x00, 0x0e, 0x20, 0x01, 0x00, 0x00, 0x81, 0xfe, 0xbf, 0x02, 0x00, 0xeb, 0x26, 0xa3,
        0x04, 0x40, 0x5f, 0x82, 0x00, 0x01, 0x90, 0x0e, 0x82, 0x00, 0x01, 0xc0, 0x0b, 0x82, 0x00, 0x21,
        0xd0, 0x0b, 0x20, 0x66, 0x04, 0xd0, 0x0b, 0x50, 0xfd, 0x09, 0xb0, 0x0c, 0x00, 0xb0, 0x09, 0x70,
        0x2f, 0x00, 0xb0, 0x09, 0x10, 0xae, 0x00, 0xb0, 0x09, 0x00, 0xe4, 0xad, 0xfc, 0x07, 0x00, 0x10,
        0x97, 0x37, 0x8f, 0x00, 0x8e, 0x00, 0x19, 0x80, 0x0b, 0x00, 0xb0, 0x08, 0x90, 0x0d, 0x00, 0xd0,
        0x09, 0x90, 0x0d, 0x00, 0xd0, 0x09, 0x90, 0x0d, 0x00, 0xd0, 0x09, 0x90, 0x4e, 0x44, 0xe4, 0x09,
        0x90, 0x82, 0xff, 0x1e, 0x09, 0x90, 0x0d, 0x00, 0xd0, 0x09, 0x90, 0x0d, 0x00, 0xd0, 0x09, 0x90,
        0x0d, 0x00, 0xd0, 0x09, 0x90, 0x0d, 0x00, 0xd0, 0x09, 0x90, 0x0d, 0x00, 0xd0, 0x09, 0x40, 0x05,
        0x00, 0x50, 0x04, 0x8e, 0x00, 0x8e, 0x00, 0x00, 0x20, 0x82, 0xdd, 0x08, 0x02, 0x10, 0x66, 0xdd,
        0x66, 0x01, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00,
        0xbb, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x08,
        0xbb, 0x00, 0x00, 0x20, 0xdd, 0xff, 0xdd, 0x02, 0x10, 0x82, 0x66, 0x00, 0x01, 0x8e, 0x00, 0x8f,
        0x00, 0x07, 0xb0, 0xdd, 0x8d, 0x00, 0x00, 0x50, 0x66, 0x9f, 0x83, 0x00, 0x00, 0x9f, 0x83, 0x00,
        0x00, 0x9f, 0x83, 0x00, 0x00, 0x9f, 0x83, 0x00, 0x00, 0x9f, 0x83, 0x00, 0x00, 0x9f, 0x83, 0x00,
        0x00, 0x9f, 0x83, 0x00, 0x0f, 0x8f, 0x00, 0x80, 0x01, 0x40, 0x5f, 0x00, 0xd0, 0xbe, 0xfa, 0x0d,
        0x00, 0x10, 0x86, 0x68, 0x01, 0x8f, 0x00, 0x8e, 0x00, 0x3b, 0x80, 0x0b, 0x00, 0xa0, 0x1c, 0x90,
        0x0d, 0x00, 0xea, 0x02, 0x90, 0x0d, 0x90, 0x4e, 0x00, 0x90, 0x0d, 0xe8, 0x04, 0x00, 0x90, 0x8d,
        0x5f, 0x00, 0x00, 0x90, 0xff, 0x9e, 0x00, 0x00, 0x90, 0x5f, 0xf6, 0x04, 0x00, 0x90, 0x0d, 0xb0,
        0x1e, 0x00, 0x90, 0x0d, 0x20, 0xaf, 0x00, 0x90, 0x0d, 0x00, 0xf7, 0x05, 0x90, 0x0d, 0x00, 0xc0,
        0x1e, 0x40, 0x05, 0x00, 0x20, 0x36, 0x8e, 0x00, 0x8f, 0x00, 0x00, 0x7d, 0x83, 0x00, 0x00, 0x8f,
        0x83, 0x00, 0x00, 0x8f, 0x83, 0x00, 0x00, 0x8f, 0x83, 0x00, 0x00, 0x8f, 0x83, 0x00, 0x00, 0x8f,
        0x83, 0x00, 0x00, 0x8f, 0x83, 0x00, 0x00, 0x8f, 0x83, 0x00, 0x00, 0x8f, 0x83, 0x00, 0x00, 0x8f,
        0x83, 0x00, 0x04, 0xef, 0xdd, 0xdd, 0x0d, 0x00, 0x82, 0x66, 0x00, 0x06, 0x8e, 0x00, 0x8e, 0x00,
        0x3b, 0xd0, 0x3d, 0x00, 0xd3, 0x0d, 0xf0, 0x8e, 0x00, 0xe8, 0x0f, 0xf0, 0xd9, 0x00, 0x8d, 0x0f,
        0xf0, 0xd6, 0x43, 0x6d, 0x0f, 0xf0, 0x86, 0x88, 0x68, 0x0f, 0xf0, 0x36, 0xdd, 0x63, 0x0f, 0xf0,
        0x06, 0xdd, 0x60, 0x0f, 0xf0, 0x06, 0x44, 0x60, 0x0f, 0xf0, 0x06, 0x00, 0x60, 0x0f, 0xf0, 0x06,
        0x00, 0x60, 0x0f, 0xf0, 0x06, 0x00, 0x60, 0x0f, 0x60, 0x02, 0x00, 0x20, 0x06, 0x8e, 0x00, 0x8e,
        0x00, 0x3b, 0x80, 0x7d, 0x00, 0xb0, 0x08, 0x90, 0xdf, 0x00, 0xd0, 0x09, 0x90, 0xee, 0x05, 0xd0,
        0x09, 0x90, 0x8d, 0x0b, 0xd0, 0x09, 0x90, 0x2d, 0x2f, 0xd0, 0x09, 0x90, 0x0d, 0x8b, 0xd0, 0x09,
        0x90, 0x0d, 0xe5, 0xd0, 0x09, 0x90, 0x0d, 0xd0, 0xd6, 0x09, 0x90, 0x0d, 0x80, 0xdc, 0x09, 0x90,
        0x0d, 0x10, 0xff, 0x09, 0x90, 0x0d, 0x00, 0xfa, 0x09, 0x40, 0x05, 0x00, 0x62, 0x04, 0x8e, 0x00,
        0x8b, 0x00, 0x00, 0x11, 0x82, 0x00, 0x39, 0xc2, 0xff, 0x2c, 0x00, 0x00, 0xcd, 0x33, 0xdc, 0x00,
        0x50, 0x3f, 0x00, 0xf3, 0x05, 0x90, 0x0f, 0x00, 0xf0, 0x09, 0xb0, 0x0d, 0x00, 0xd0, 0x0b, 0xb0,
        0x0d, 0x00, 0xd0, 0x0b, 0xb0, 0x0d, 0x00, 0xd0, 0x0b, 0xa0, 0x0e, 0x00, 0xe0, 0x0a, 0x70, 0x1f,
        0x00, 0xf1, 0x07, 0x30, 0x8f, 0x00, 0xf8, 0x03, 0x00, 0xf8, 0xbb, 0x8f, 0x00, 0x00, 0x40, 0x88,
        0x04, 0x8f, 0x00, 0x8e, 0x00, 0x24, 0x20, 0xdd, 0xdd, 0x6c, 0x00, 0x20, 0x9f, 0x66, 0xfb, 0x07,
        0x20, 0x6f, 0x00, 0xc0, 0x0d, 0x20, 0x6f, 0x00, 0x90, 0x0f, 0x20, 0x6f, 0x00, 0xd0, 0x0c, 0x20,
        0x9f, 0x76, 0xfc, 0x06, 0x20, 0xef, 0xcd, 0x4a, 0x00, 0x20, 0x6f, 0x82, 0x00, 0x01, 0x20, 0x6f,
        0x82, 0x00, 0x01, 0x20, 0x6f, 0x82, 0x00, 0x01, 0x20, 0x6f, 0x82, 0x00, 0x01, 0x10, 0x26, 0x91,
        0x00, 0x8b, 0x00, 0x00, 0x11, 0x82, 0x00, 0x39, 0xc2, 0xff, 0x2c, 0x00, 0x00, 0xcd, 0x33, 0xdc,
        0x00, 0x50, 0x3f, 0x00, 0xf3, 0x05, 0x90, 0x0f, 0x00, 0xf0, 0x09, 0xb0, 0x0d, 0x00, 0xd0, 0x0b,
        0xb0, 0x0d, 0x00, 0xd0, 0x0b, 0xb0, 0x0d, 0x00, 0xd0, 0x0b, 0xa0, 0x0e, 0x00, 0xe0, 0x0a, 0x70,
        0x1f, 0x00, 0xf1, 0x08, 0x30, 0x8f, 0x00, 0xf8, 0x03, 0x00, 0xf8, 0xbb, 0x8f, 0x00, 0x00, 0x40,
        0xc8, 0x2e, 0x82, 0x00, 0x01, 0x10, 0xdb, 0x83, 0x00, 0x00, 0x21, 0x85, 0x00, 0x8e, 0x00, 0x3b,
        0x80, 0xdd, 0xdd, 0x19, 0x00, 0x90, 0x6f, 0x76, 0xde, 0x00, 0x90, 0x0f, 0x00, 0xf6, 0x05, 0x90,
        0x0f, 0x00, 0xf4, 0x06, 0x90, 0x0f, 0x00, 0xf8, 0x03, 0x90, 0x9f, 0xc9, 0x6e, 0x00, 0x90, 0x9f,
        0xd9, 0x1c, 0x00, 0x90, 0x0f, 0x10, 0xbd, 0x00, 0x90, 0x0f, 0x00, 0xf5, 0x04, 0x90, 0x0f, 0x00,
        0xd0, 0x0b, 0x90, 0x0f, 0x00, 0x60, 0x4f, 0x40, 0x06, 0x00, 0x00, 0x36, 0x8e, 0x00, 0x8b, 0x00,
        0x00, 0x21, 0x82, 0x00, 0x0a, 0xd4, 0xff, 0xae, 0x00, 0x30, 0x9f, 0x23, 0xb5, 0x00, 0x80, 0x0e,
        0x82, 0x00, 0x01, 0x90, 0x0e, 0x82, 0x00, 0x02, 0x50, 0xbf, 0x15, 0x82, 0x00, 0x02, 0xe7, 0xff,
        0x4b, 0x82, 0x00, 0x02, 0x73, 0xfd, 0x03, 0x82, 0x00, 0x01, 0xe1, 0x08, 0x82, 0x00, 0x0f, 0xd0,
        0x09, 0x50, 0x03, 0x00, 0xf4, 0x07, 0x70, 0xcf, 0xba, 0xbf, 0x01, 0x00, 0x74, 0x89, 0x05, 0x8f,
        0x00, 0x8e, 0x00, 0x00, 0xd3, 0x82, 0xdd, 0x08, 0x3d, 0x61, 0x66, 0xdd, 0x66, 0x16, 0x00, 0x00,
        0xbb, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00,
        0xbb, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00,
        0xbb, 0x83, 0x00, 0x00, 0x44, 0x90, 0x00, 0x8e, 0x00, 0x3a, 0x70, 0x0d, 0x00, 0xd0, 0x07, 0x80,
        0x0f, 0x00, 0xf0, 0x08, 0x80, 0x0f, 0x00, 0xf0, 0x08, 0x80, 0x0f, 0x00, 0xf0, 0x08, 0x80, 0x0f,
        0x00, 0xf0, 0x08, 0x80, 0x0f, 0x00, 0xf0, 0x08, 0x80, 0x0f, 0x00, 0xf0, 0x08, 0x80, 0x0f, 0x00,
        0xf0, 0x08, 0x70, 0x0f, 0x00, 0xf0, 0x07, 0x40, 0x4f, 0x00, 0xf4, 0x04, 0x00, 0xfb, 0xbb, 0xbf,
        0x00, 0x00, 0x50, 0x88, 0x05, 0x8f, 0x00, 0x8e, 0x00, 0x35, 0xd1, 0x06, 0x00, 0x60, 0x1d, 0xc0,
        0x0b, 0x00, 0xb0, 0x0c, 0x80, 0x0f, 0x00, 0xf0, 0x08, 0x40, 0x4f, 0x00, 0xf4, 0x04, 0x00, 0x8e,
        0x00, 0xe8, 0x00, 0x00, 0xca, 0x00, 0xac, 0x00, 0x00, 0xf5, 0x11, 0x5f, 0x00, 0x00, 0xf1, 0x55,
        0x1f, 0x00, 0x00, 0xb0, 0x99, 0x0b, 0x00, 0x00, 0x70, 0xdd, 0x07, 0x00, 0x00, 0x30, 0xff, 0x03,
        0x82, 0x00, 0x00, 0x55, 0x90, 0x00, 0x8e, 0x00, 0x00, 0xb8, 0x82, 0x00, 0x01, 0x8b, 0xf7, 0x82,
        0x00, 0x31, 0x7f, 0xf4, 0x02, 0x00, 0x20, 0x4f, 0xf2, 0x04, 0xbc, 0x40, 0x2f, 0xf0, 0x15, 0xff,
        0x51, 0x0f, 0xd0, 0x47, 0xcc, 0x74, 0x0d, 0xa0, 0x89, 0x98, 0x98, 0x0a, 0x80, 0xbb, 0x55, 0xbb,
        0x08, 0x60, 0xec, 0x22, 0xce, 0x06, 0x40, 0xdf, 0x00, 0xfe, 0x04, 0x10, 0xaf, 0x00, 0xfa, 0x01,
        0x00, 0x36, 0x00, 0x63, 0x8f, 0x00, 0x8e, 0x00, 0x17, 0x90, 0x0c, 0x00, 0x80, 0x1c, 0x20, 0x7f,
        0x00, 0xf3, 0x06, 0x00, 0xe8, 0x01, 0xbc, 0x00, 0x00, 0xd0, 0x69, 0x2f, 0x00, 0x00, 0x40, 0xef,
        0x07, 0x82, 0x00, 0x20, 0xfe, 0x01, 0x00, 0x00, 0x70, 0xdf, 0x08, 0x00, 0x00, 0xe2, 0x57, 0x3f,
        0x00, 0x00, 0xdb, 0x00, 0xcb, 0x00, 0x50, 0x4f, 0x00, 0xf3, 0x06, 0xe1, 0x0a, 0x00, 0x90, 0x1e,
        0x62, 0x01, 0x00, 0x10, 0x26, 0x8e, 0x00, 0x8e, 0x00, 0x1c, 0xd2, 0x07, 0x00, 0x70, 0x2d, 0x80,
        0x1e, 0x00, 0xe1, 0x08, 0x10, 0x9e, 0x00, 0xe9, 0x01, 0x00, 0xf6, 0x22, 0x6f, 0x00, 0x00, 0xc0,
        0xba, 0x0c, 0x00, 0x00, 0x40, 0xff, 0x03, 0x82, 0x00, 0x00, 0xcc, 0x83, 0x00, 0x00, 0xbb, 0x83,
        0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0x44, 0x90,
        0x00, 0x8e, 0x00, 0x00, 0x30, 0x82, 0xdd, 0x05, 0x0d, 0x10, 0x66, 0x66, 0xe6, 0x0c, 0x82, 0x00,
        0x05, 0xf7, 0x03, 0x00, 0x00, 0x20, 0x8f, 0x82, 0x00, 0x01, 0xc0, 0x0c, 0x82, 0x00, 0x05, 0xf6,
        0x03, 0x00, 0x00, 0x20, 0x8e, 0x82, 0x00, 0x01, 0xb0, 0x0c, 0x82, 0x00, 0x05, 0xf6, 0x03, 0x00,
        0x00, 0x20, 0x8e, 0x82, 0x00, 0x05, 0x70, 0xdf, 0xdd, 0xdd, 0x2d, 0x30, 0x82, 0x66, 0x00, 0x16,
        0x8e, 0x00, 0x8a, 0x00, 0x0b, 0x10, 0x66, 0x06, 0x00, 0x00, 0x20, 0xbf, 0x09, 0x00, 0x00, 0x20,
        0x4f, 0x82, 0x00, 0x01, 0x20, 0x4f, 0x82, 0x00, 0x01, 0x20, 0x4f, 0x82, 0x00, 0x01, 0x20, 0x4f,
        0x82, 0x00, 0x01, 0x20, 0x4f, 0x82, 0x00, 0x01, 0x20, 0x4f, 0x82, 0x00, 0x01, 0x20, 0x4f, 0x82,
        0x00, 0x01, 0x20, 0x4f, 0x82, 0x00, 0x01, 0x20, 0x4f, 0x82, 0x00, 0x01, 0x20, 0x4f, 0x82, 0x00,
        0x01, 0x20, 0x4f, 0x82, 0x00, 0x07, 0x20, 0xcf, 0x0b, 0x00, 0x00, 0x10, 0x66, 0x06, 0x85, 0x00,
        0x8e, 0x00, 0x01, 0x90, 0x0a, 0x82, 0x00, 0x01, 0x30, 0x3f, 0x83, 0x00, 0x00, 0xab, 0x83, 0x00,
        0x01, 0xf4, 0x02, 0x82, 0x00, 0x01, 0xc0, 0x09, 0x82, 0x00, 0x01, 0x50, 0x1f, 0x83, 0x00, 0x00,
        0x8d, 0x83, 0x00, 0x01, 0xe6, 0x01, 0x82, 0x00, 0x01, 0xe0, 0x08, 0x82, 0x00, 0x01, 0x70, 0x0e,
        0x82, 0x00, 0x01, 0x10, 0x7e, 0x83, 0x00, 0x00, 0xd8, 0x83, 0x00, 0x01, 0xb1, 0x04, 0x89, 0x00,
        0x8a, 0x00, 0x07, 0x60, 0x66, 0x01, 0x00, 0x00, 0x90, 0xfb, 0x02, 0x82, 0x00, 0x01, 0xf4, 0x02,
        0x82, 0x00, 0x01, 0xf4, 0x02, 0x82, 0x00, 0x01, 0xf4, 0x02, 0x82, 0x00, 0x01, 0xf4, 0x02, 0x82,
        0x00, 0x01, 0xf4, 0x02, 0x82, 0x00, 0x01, 0xf4, 0x02, 0x82, 0x00, 0x01, 0xf4, 0x02, 0x82, 0x00,
        0x01, 0xf4, 0x02, 0x82, 0x00, 0x01, 0xf4, 0x02, 0x82, 0x00, 0x01, 0xf4, 0x02, 0x82, 0x00, 0x0b,
        0xf4, 0x02, 0x00, 0x00, 0xb0, 0xfc, 0x02, 0x00, 0x00, 0x60, 0x66, 0x01, 0x85, 0x00, 0x8f, 0x00,
        0x17, 0x20, 0xcc, 0x02, 0x00, 0x00, 0xc1, 0xbb, 0x1c, 0x00, 0x00, 0xda, 0x11, 0xad, 0x00, 0x70,
        0x1d, 0x00, 0xd1, 0x07, 0x40, 0x02, 0x00, 0x20, 0x04, 0xb1, 0x00, 0xd4, 0x00, 0x00, 0x96, 0x82,
        0x99, 0x00, 0x69, 0x8a, 0x00, 0x01, 0xe2, 0x05, 0x82, 0x00, 0x01, 0x40, 0x2e, 0x83, 0x00, 0x00,
        0xa6, 0xc2, 0x00, 0x99, 0x00, 0x0d, 0x30, 0x44, 0x01, 0x00, 0x00, 0xfd, 0xed, 0x6f, 0x00, 0x00,
        0x16, 0x00, 0xf7, 0x02, 0x82, 0x00, 0x1f, 0xf1, 0x04, 0x00, 0xc5, 0xff, 0xff, 0x06, 0x40, 0x7f,
        0x22, 0xf3, 0x06, 0x90, 0x0c, 0x00, 0xf3, 0x06, 0x90, 0x0d, 0x00, 0xfa, 0x06, 0x30, 0xce, 0xc9,
        0xfa, 0x06, 0x00, 0x82, 0x58, 0x60, 0x02, 0x8e, 0x00, 0x89, 0x00, 0x01, 0x10, 0x16, 0x82, 0x00,
        0x01, 0x40, 0x4f, 0x82, 0x00, 0x01, 0x40, 0x4f, 0x82, 0x00, 0x30, 0x40, 0x4f, 0x42, 0x02, 0x00,
        0x40, 0xaf, 0xef, 0x8f, 0x00, 0x40, 0xcf, 0x01, 0xf6, 0x04, 0x40, 0x6f, 0x00, 0xe0, 0x08, 0x40,
        0x4f, 0x00, 0xb0, 0x0b, 0x40, 0x4f, 0x00, 0xb0, 0x0b, 0x40, 0x5f, 0x00, 0xd0, 0x09, 0x40, 0xbf,
        0x00, 0xf3, 0x05, 0x40, 0xdf, 0xab, 0xbe, 0x00, 0x10, 0x26, 0x86, 0x06, 0x8f, 0x00, 0x9a, 0x00,
        0x0e, 0x41, 0x14, 0x00, 0x00, 0x90, 0xef, 0xfe, 0x04, 0x00, 0xf8, 0x04, 0x30, 0x04, 0x00, 0x8e,
        0x82, 0x00, 0x01, 0x20, 0x5f, 0x82, 0x00, 0x01, 0x20, 0x4f, 0x82, 0x00, 0x01, 0x10, 0x7f, 0x83,
        0x00, 0x0c, 0xda, 0x01, 0x00, 0x02, 0x00, 0xc1, 0xae, 0xea, 0x06, 0x00, 0x00, 0x85, 0x58, 0x8f,
        0x00, 0x8c, 0x00, 0x01, 0x61, 0x01, 0x82, 0x00, 0x01, 0xf2, 0x04, 0x82, 0x00, 0x33, 0xf2, 0x04,
        0x00, 0x20, 0x24, 0xf2, 0x04, 0x00, 0xf7, 0xfe, 0xf9, 0x04, 0x30, 0x7f, 0x10, 0xfc, 0x04, 0x80,
        0x0e, 0x00, 0xf6, 0x04, 0xb0, 0x0b, 0x00, 0xf3, 0x04, 0xb0, 0x0b, 0x00, 0xf3, 0x04, 0x90, 0x0d,
        0x00, 0xf5, 0x04, 0x50, 0x3f, 0x00, 0xfb, 0x04, 0x00, 0xeb, 0xba, 0xfc, 0x04, 0x00, 0x60, 0x68,
        0x61, 0x01, 0x8e, 0x00, 0x9a, 0x00, 0x1d, 0x43, 0x02, 0x00, 0x00, 0xe4, 0xee, 0x8f, 0x00, 0x10,
        0x9e, 0x00, 0xf4, 0x04, 0x80, 0x0e, 0x00, 0xb0, 0x09, 0xa0, 0x9e, 0x99, 0xd9, 0x0b, 0xb0, 0x8d,
        0x88, 0x88, 0x06, 0x90, 0x0d, 0x82, 0x00, 0x0d, 0x30, 0x5f, 0x00, 0x10, 0x02, 0x00, 0xf7, 0x9b,
        0xfb, 0x06, 0x00, 0x30, 0x87, 0x47, 0x8f, 0x00, 0x8b, 0x00, 0x0a, 0x30, 0x66, 0x02, 0x00, 0x00,
        0xf7, 0xbc, 0x04, 0x00, 0x00, 0x8d, 0x82, 0x00, 0x04, 0x22, 0x8d, 0x22, 0x01, 0x20, 0x82, 0xff,
        0x03, 0x06, 0x00, 0x00, 0x8d, 0x83, 0x00, 0x00, 0x8d, 0x83, 0x00, 0x00, 0x8d, 0x83, 0x00, 0x00,
        0x8d, 0x83, 0x00, 0x00, 0x8d, 0x83, 0x00, 0x00, 0x8d, 0x83, 0x00, 0x00, 0x8d, 0x83, 0x00, 0x00,
        0x35, 0x90, 0x00, 0x99, 0x00, 0x30, 0x20, 0x24, 0x20, 0x00, 0x00, 0xf7, 0xee, 0xf8, 0x04, 0x30,
        0x7f, 0x10, 0xfc, 0x04, 0x80, 0x0e, 0x00, 0xf5, 0x04, 0xb0, 0x0b, 0x00, 0xf3, 0x04, 0xb0, 0x0b,
        0x00, 0xf3, 0x04, 0x90, 0x0e, 0x00, 0xf5, 0x04, 0x40, 0x6f, 0x00, 0xfb, 0x04, 0x00, 0xf8, 0xdc,
        0xf9, 0x04, 0x00, 0x30, 0x46, 0xf3, 0x03, 0x82, 0x00, 0x0b, 0xe7, 0x00, 0x00, 0x9a, 0x87, 0x7f,
        0x00, 0x00, 0x94, 0x99, 0x04, 0x00, 0x89, 0x00, 0x01, 0x10, 0x16, 0x82, 0x00, 0x01, 0x20, 0x4f,
        0x82, 0x00, 0x01, 0x20, 0x4f, 0x82, 0x00, 0x31, 0x20, 0x4f, 0x41, 0x03, 0x00, 0x20, 0x8f, 0xee,
        0x8f, 0x00, 0x20, 0xcf, 0x01, 0xf8, 0x01, 0x20, 0x5f, 0x00, 0xf2, 0x04, 0x20, 0x4f, 0x00, 0xf2,
        0x04, 0x20, 0x4f, 0x00, 0xf2, 0x04, 0x20, 0x4f, 0x00, 0xf2, 0x04, 0x20, 0x4f, 0x00, 0xf2, 0x04,
        0x20, 0x4f, 0x00, 0xf2, 0x04, 0x10, 0x16, 0x00, 0x61, 0x01, 0x8e, 0x00, 0x8b, 0x00, 0x00, 0x53,
        0x83, 0x00, 0x00, 0xd8, 0x83, 0x00, 0x00, 0x53, 0x82, 0x00, 0x01, 0x21, 0x22, 0x82, 0x00, 0x01,
        0xfb, 0xdf, 0x83, 0x00, 0x00, 0xd8, 0x83, 0x00, 0x00, 0xd8, 0x83, 0x00, 0x00, 0xd8, 0x83, 0x00,
        0x00, 0xd8, 0x83, 0x00, 0x00, 0xd8, 0x83, 0x00, 0x08, 0xd8, 0x00, 0x00, 0x30, 0xbb, 0xfd, 0xbb,
        0x07, 0x10, 0x82, 0x66, 0x00, 0x04, 0x8e, 0x00, 0x8b, 0x00, 0x01, 0x61, 0x01, 0x82, 0x00, 0x01,
        0xf2, 0x04, 0x82, 0x00, 0x05, 0x61, 0x01, 0x00, 0x00, 0x21, 0x22, 0x82, 0x00, 0x02, 0xf8, 0xff,
        0x04, 0x82, 0x00, 0x01, 0xf2, 0x04, 0x82, 0x00, 0x01, 0xf2, 0x04, 0x82, 0x00, 0x01, 0xf2, 0x04,
        0x82, 0x00, 0x01, 0xf2, 0x04, 0x82, 0x00, 0x01, 0xf2, 0x04, 0x82, 0x00, 0x01, 0xf2, 0x04, 0x82,
        0x00, 0x01, 0xf2, 0x04, 0x82, 0x00, 0x01, 0xf2, 0x04, 0x82, 0x00, 0x0c, 0xf4, 0x02, 0x00, 0x20,
        0x99, 0xbe, 0x00, 0x00, 0x20, 0x99, 0x17, 0x00, 0x00, 0x8a, 0x00, 0x00, 0x35, 0x83, 0x00, 0x00,
        0x8d, 0x83, 0x00, 0x00, 0x8d, 0x83, 0x00, 0x30, 0x8d, 0x00, 0x20, 0x02, 0x00, 0x8d, 0x00, 0xf7,
        0x05, 0x00, 0x8d, 0x70, 0x4e, 0x00, 0x00, 0x8d, 0xe7, 0x04, 0x00, 0x00, 0xed, 0xdf, 0x01, 0x00,
        0x00, 0xed, 0xe4, 0x09, 0x00, 0x00, 0x8d, 0x50, 0x5f, 0x00, 0x00, 0x8d, 0x00, 0xe9, 0x02, 0x00,
        0x8d, 0x00, 0xd1, 0x0c, 0x00, 0x35, 0x00, 0x20, 0x26, 0x8e, 0x00, 0x89, 0x00, 0x07, 0x40, 0x88,
        0x18, 0x00, 0x00, 0x50, 0xb9, 0x2f, 0x82, 0x00, 0x01, 0x40, 0x2f, 0x82, 0x00, 0x01, 0x40, 0x2f,
        0x82, 0x00, 0x01, 0x40, 0x2f, 0x82, 0x00, 0x01, 0x40, 0x2f, 0x82, 0x00, 0x01, 0x40, 0x2f, 0x82,
        0x00, 0x01, 0x40, 0x2f, 0x82, 0x00, 0x01, 0x40, 0x2f, 0x82, 0x00, 0x01, 0x40, 0x3f, 0x82, 0x00,
        0x01, 0x10, 0x7f, 0x83, 0x00, 0x07, 0xf8, 0xdd, 0x02, 0x00, 0x00, 0x30, 0x66, 0x01, 0x8e, 0x00,
        0x98, 0x00, 0x31, 0x20, 0x31, 0x03, 0x33, 0x00, 0xd0, 0xdc, 0xaf, 0xfe, 0x07, 0xd0, 0x09, 0xdb,
        0x80, 0x0c, 0xd0, 0x07, 0xb9, 0x60, 0x0d, 0xd0, 0x06, 0x99, 0x60, 0x0d, 0xd0, 0x06, 0x99, 0x60,
        0x0d, 0xd0, 0x06, 0x99, 0x60, 0x0d, 0xd0, 0x06, 0x99, 0x60, 0x0d, 0xd0, 0x06, 0x99, 0x60, 0x0d,
        0x50, 0x02, 0x44, 0x20, 0x05, 0x8e, 0x00, 0x99, 0x00, 0x30, 0x02, 0x41, 0x03, 0x00, 0x20, 0x8f,
        0xee, 0x8f, 0x00, 0x20, 0xcf, 0x01, 0xf8, 0x01, 0x20, 0x5f, 0x00, 0xf2, 0x04, 0x20, 0x4f, 0x00,
        0xf2, 0x04, 0x20, 0x4f, 0x00, 0xf2, 0x04, 0x20, 0x4f, 0x00, 0xf2, 0x04, 0x20, 0x4f, 0x00, 0xf2,
        0x04, 0x20, 0x4f, 0x00, 0xf2, 0x04, 0x10, 0x16, 0x00, 0x61, 0x01, 0x8e, 0x00, 0x99, 0x00, 0x2f,
        0x10, 0x44, 0x01, 0x00, 0x00, 0xf5, 0xee, 0x5f, 0x00, 0x20, 0x9f, 0x00, 0xf9, 0x02, 0x70, 0x1f,
        0x00, 0xf1, 0x07, 0x90, 0x0d, 0x00, 0xd0, 0x09, 0x90, 0x0d, 0x00, 0xd0, 0x09, 0x80, 0x0f, 0x00,
        0xf0, 0x08, 0x30, 0x6f, 0x00, 0xf6, 0x03, 0x00, 0xf9, 0xaa, 0x9f, 0x00, 0x00, 0x40, 0x88, 0x04,
        0x8f, 0x00, 0x99, 0x00, 0x32, 0x02, 0x42, 0x02, 0x00, 0x40, 0x8f, 0xef, 0x7f, 0x00, 0x40, 0xcf,
        0x01, 0xf7, 0x03, 0x40, 0x6f, 0x00, 0xe0, 0x08, 0x40, 0x3f, 0x00, 0xb0, 0x0a, 0x40, 0x3f, 0x00,
        0xb0, 0x0b, 0x40, 0x4f, 0x00, 0xd0, 0x09, 0x40, 0xaf, 0x00, 0xf4, 0x05, 0x40, 0xcf, 0xab, 0xbe,
        0x00, 0x40, 0x2f, 0x86, 0x06, 0x00, 0x40, 0x2f, 0x82, 0x00, 0x01, 0x40, 0x2f, 0x82, 0x00, 0x01,
        0x20, 0x19, 0x82, 0x00, 0x99, 0x00, 0x30, 0x10, 0x24, 0x20, 0x00, 0x00, 0xf5, 0xfe, 0xfa, 0x04,
        0x20, 0x9f, 0x10, 0xfc, 0x04, 0x70, 0x1f, 0x00, 0xf4, 0x04, 0x90, 0x0d, 0x00, 0xf2, 0x04, 0x90,
        0x0d, 0x00, 0xf2, 0x04, 0x80, 0x0e, 0x00, 0xf3, 0x04, 0x30, 0x5f, 0x00, 0xf9, 0x04, 0x00, 0xfa,
        0xba, 0xfd, 0x04, 0x00, 0x60, 0x79, 0xf3, 0x04, 0x82, 0x00, 0x01, 0xf2, 0x04, 0x82, 0x00, 0x01,
        0xf2, 0x04, 0x82, 0x00, 0x01, 0x91, 0x02, 0x99, 0x00, 0x10, 0x20, 0x01, 0x43, 0x01, 0x00, 0xd0,
        0xb8, 0xff, 0x1f, 0x00, 0xd0, 0x8e, 0x01, 0x14, 0x00, 0xd0, 0x0b, 0x82, 0x00, 0x01, 0xd0, 0x08,
        0x82, 0x00, 0x01, 0xd0, 0x08, 0x82, 0x00, 0x01, 0xd0, 0x08, 0x82, 0x00, 0x01, 0xd0, 0x08, 0x82,
        0x00, 0x01, 0xd0, 0x08, 0x82, 0x00, 0x01, 0x50, 0x03, 0x90, 0x00, 0x99, 0x00, 0x0f, 0x10, 0x44,
        0x03, 0x00, 0x00, 0xf5, 0xde, 0xaf, 0x00, 0x00, 0x9e, 0x00, 0x41, 0x00, 0x00, 0x7f, 0x83, 0x00,
        0x07, 0xf9, 0x8b, 0x04, 0x00, 0x00, 0x50, 0xc9, 0xaf, 0x83, 0x00, 0x0f, 0xf8, 0x01, 0x00, 0x02,
        0x00, 0xf6, 0x01, 0x00, 0xcf, 0xa9, 0x8f, 0x00, 0x00, 0x73, 0x89, 0x04, 0x8f, 0x00, 0x8f, 0x00,
        0x01, 0x30, 0x08, 0x82, 0x00, 0x09, 0x60, 0x0f, 0x00, 0x00, 0x10, 0x72, 0x2f, 0x22, 0x00, 0x90,
        0x82, 0xff, 0x03, 0x02, 0x00, 0x60, 0x0f, 0x82, 0x00, 0x01, 0x60, 0x0f, 0x82, 0x00, 0x01, 0x60,
        0x0f, 0x82, 0x00, 0x01, 0x60, 0x0f, 0x82, 0x00, 0x01, 0x60, 0x0f, 0x82, 0x00, 0x01, 0x50, 0x2f,
        0x82, 0x00, 0x08, 0x10, 0xed, 0xbb, 0x01, 0x00, 0x00, 0x40, 0x66, 0x01, 0x8e, 0x00, 0x99, 0x00,
        0x30, 0x02, 0x00, 0x20, 0x00, 0x20, 0x4f, 0x00, 0xf2, 0x04, 0x20, 0x4f, 0x00, 0xf2, 0x04, 0x20,
        0x4f, 0x00, 0xf2, 0x04, 0x20, 0x4f, 0x00, 0xf2, 0x04, 0x20, 0x4f, 0x00, 0xf2, 0x04, 0x20, 0x4f,
        0x00, 0xf3, 0x04, 0x10, 0x7f, 0x00, 0xf8, 0x04, 0x00, 0xfa, 0xba, 0xfb, 0x04, 0x00, 0x60, 0x58,
        0x61, 0x01, 0x8e, 0x00, 0x98, 0x00, 0x2b, 0x20, 0x01, 0x00, 0x10, 0x02, 0xa0, 0x0b, 0x00, 0xb0,
        0x0a, 0x50, 0x2f, 0x00, 0xf2, 0x05, 0x00, 0x7e, 0x00, 0xe7, 0x00, 0x00, 0xc9, 0x00, 0x9c, 0x00,
        0x00, 0xf4, 0x22, 0x4f, 0x00, 0x00, 0xd0, 0x77, 0x0d, 0x00, 0x00, 0x80, 0xcc, 0x08, 0x00, 0x00,
        0x30, 0xff, 0x03, 0x82, 0x00, 0x00, 0x55, 0x90, 0x00, 0x98, 0x00, 0x00, 0x11, 0x82, 0x00, 0x01,
        0x11, 0xd8, 0x82, 0x00, 0x27, 0x8d, 0xf4, 0x01, 0x00, 0x10, 0x4f, 0xf1, 0x04, 0x67, 0x40, 0x1f,
        0xc0, 0x08, 0xed, 0x80, 0x0c, 0x90, 0x3b, 0xbb, 0xb3, 0x09, 0x50, 0x7e, 0x77, 0xe7, 0x05, 0x20,
        0xdf, 0x33, 0xfd, 0x02, 0x00, 0xdd, 0x00, 0xdd, 0x00, 0x00, 0x44, 0x00, 0x44, 0x8f, 0x00, 0x98,
        0x00, 0x31, 0x10, 0x01, 0x00, 0x10, 0x01, 0x50, 0x3f, 0x00, 0xf4, 0x05, 0x00, 0xd9, 0x11, 0x9d,
        0x00, 0x00, 0xc0, 0xaa, 0x0c, 0x00, 0x00, 0x20, 0xee, 0x02, 0x00, 0x00, 0x30, 0xff, 0x03, 0x00,
        0x00, 0xd1, 0x99, 0x1d, 0x00, 0x00, 0xca, 0x11, 0xac, 0x00, 0x70, 0x3f, 0x00, 0xf3, 0x07, 0x50,
        0x04, 0x00, 0x40, 0x05, 0x8e, 0x00, 0x98, 0x00, 0x26, 0x20, 0x01, 0x00, 0x10, 0x02, 0x90, 0x0c,
        0x00, 0xa0, 0x0c, 0x40, 0x3f, 0x00, 0xf1, 0x06, 0x00, 0x9d, 0x00, 0xf6, 0x01, 0x00, 0xe7, 0x00,
        0xab, 0x00, 0x00, 0xf1, 0x25, 0x4f, 0x00, 0x00, 0xa0, 0x8b, 0x0d, 0x00, 0x00, 0x40, 0xef, 0x07,
        0x82, 0x00, 0x01, 0xfd, 0x02, 0x82, 0x00, 0x00, 0xbb, 0x82, 0x00, 0x0d, 0x20, 0x5f, 0x00, 0x00,
        0x20, 0xd9, 0x0c, 0x00, 0x00, 0x20, 0x79, 0x01, 0x00, 0x00, 0x99, 0x00, 0x82, 0x22, 0x01, 0x00,
        0x00, 0x82, 0xff, 0x00, 0x04, 0x82, 0x00, 0x05, 0xda, 0x01, 0x00, 0x00, 0x70, 0x3e, 0x82, 0x00,
        0x05, 0xf4, 0x05, 0x00, 0x00, 0x20, 0x8e, 0x82, 0x00, 0x01, 0xc1, 0x0b, 0x82, 0x00, 0x09, 0xda,
        0x01, 0x00, 0x00, 0x20, 0xdf, 0xbb, 0xbb, 0x03, 0x10, 0x82, 0x66, 0x00, 0x01, 0x8e, 0x00, 0x8b,
        0x00, 0x01, 0x20, 0x65, 0x82, 0x00, 0x01, 0xf4, 0xac, 0x82, 0x00, 0x00, 0xd9, 0x83, 0x00, 0x00,
        0xb9, 0x83, 0x00, 0x00, 0xb9, 0x83, 0x00, 0x00, 0xba, 0x82, 0x00, 0x01, 0x10, 0x9d, 0x82, 0x00,
        0x01, 0xec, 0x1c, 0x82, 0x00, 0x01, 0x74, 0x6f, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0xb9,
        0x83, 0x00, 0x00, 0xb9, 0x83, 0x00, 0x00, 0xc9, 0x83, 0x00, 0x01, 0xf7, 0x45, 0x82, 0x00, 0x01,
        0x91, 0xdc, 0x85, 0x00, 0x8b, 0x00, 0x00, 0x55, 0x83, 0x00, 0x00, 0x99, 0x83, 0x00, 0x00, 0x99,
        0x83, 0x00, 0x00, 0x99, 0x83, 0x00, 0x00, 0x99, 0x83, 0x00, 0x00, 0x99, 0x83, 0x00, 0x00, 0x99,
        0x83, 0x00, 0x00, 0x99, 0x83, 0x00, 0x00, 0x99, 0x83, 0x00, 0x00, 0x99, 0x83, 0x00, 0x00, 0x99,
        0x83, 0x00, 0x00, 0x99, 0x83, 0x00, 0x00, 0x99, 0x83, 0x00, 0x00, 0x99, 0x83, 0x00, 0x00, 0x99,
        0x83, 0x00, 0x02, 0x99, 0x00, 0x00, 0x8a, 0x00, 0x01, 0x56, 0x02, 0x82, 0x00, 0x01, 0xca, 0x4f,
        0x83, 0x00, 0x00, 0x9d, 0x83, 0x00, 0x00, 0x9b, 0x83, 0x00, 0x00, 0x9b, 0x83, 0x00, 0x00, 0x9b,
        0x83, 0x00, 0x01, 0xd9, 0x01, 0x82, 0x00, 0x01, 0xc1, 0xce, 0x82, 0x00, 0x01, 0xf6, 0x47, 0x82,
        0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0x9b, 0x83, 0x00, 0x00, 0x9b, 0x83, 0x00, 0x00, 0x9c, 0x82,
        0x00, 0x01, 0x54, 0x7f, 0x82, 0x00, 0x01, 0xcd, 0x19, 0x86, 0x00, 0xa7, 0x00, 0x0e, 0x10, 0x86,
        0x05, 0x00, 0x03, 0xe0, 0xbc, 0xee, 0xba, 0x0e, 0x40, 0x00, 0x50, 0x89, 0x02, 0xa2, 0x00, 0x8b,
        0x00, 0x00, 0x11, 0x82, 0x00, 0x16, 0x80, 0xee, 0x08, 0x00, 0x00, 0xc4, 0x11, 0x4c, 0x00, 0x00,
        0xa6, 0x00, 0x6a, 0x00, 0x00, 0xe2, 0x66, 0x1e, 0x00, 0x00, 0x30, 0x99, 0x03, 0xb2, 0x00, 0xa4,
        0x00, 0x00, 0x22, 0x83, 0x00, 0x00, 0xff, 0x83, 0x00, 0x00, 0xff, 0x83, 0x00, 0x00, 0x22, 0xa4,
        0x00, 0x8f, 0x00, 0x3a, 0x90, 0xdd, 0xdd, 0x2d, 0x00, 0xe0, 0xe8, 0x6a, 0x16, 0x00, 0xf3, 0xd1,
        0x08, 0x00, 0x00, 0xc8, 0xd0, 0x08, 0x00, 0x00, 0x8b, 0xd0, 0x49, 0x03, 0x10, 0x4f, 0xd0, 0xff,
        0x0d, 0x50, 0x0f, 0xd0, 0x08, 0x00, 0x90, 0xbf, 0xfb, 0x08, 0x00, 0xd0, 0x8b, 0xe8, 0x08, 0x00,
        0xf2, 0x03, 0xd0, 0x08, 0x00, 0xe6, 0x00, 0xd0, 0xde, 0x3d, 0x44, 0x00, 0x50, 0x66, 0x16, 0x8e,
        0x00, 0x8e, 0x00, 0x39, 0x80, 0xdd, 0xad, 0x04, 0x00, 0x90, 0x6e, 0xa6, 0x6f, 0x00, 0x90, 0x0d,
        0x00, 0xf8, 0x02, 0x90, 0x0d, 0x00, 0xf2, 0x06, 0xa1, 0x2d, 0x02, 0xf0, 0x09, 0xf9, 0xff, 0x0d,
        0xd0, 0x09, 0x90, 0x0d, 0x00, 0xe0, 0x09, 0x90, 0x0d, 0x00, 0xf1, 0x08, 0x90, 0x0d, 0x00, 0xf5,
        0x04, 0x90, 0x0d, 0x40, 0xce, 0x00, 0x90, 0xdf, 0xfe, 0x1a, 0x00, 0x40, 0x66, 0x24, 0x90, 0x00,
        0x9d, 0x00, 0x22, 0x30, 0x1b, 0x00, 0xb1, 0x03, 0x10, 0xbd, 0x11, 0xdb, 0x01, 0x00, 0xd1, 0xbb,
        0x1d, 0x00, 0x00, 0x20, 0xff, 0x02, 0x00, 0x00, 0xb1, 0xdd, 0x1b, 0x00, 0x10, 0xdd, 0x11, 0xbd,
        0x01, 0x30, 0x1c, 0x00, 0xc1, 0x03, 0x98, 0x00, 0x8b, 0x00, 0x3d, 0x11, 0x00, 0x02, 0x00, 0xc2,
        0xff, 0x4c, 0x2d, 0x00, 0xcd, 0x33, 0xfc, 0x07, 0x50, 0x4f, 0x00, 0xf7, 0x05, 0x90, 0x0f, 0x20,
        0xfd, 0x09, 0xb0, 0x0d, 0xc0, 0xd5, 0x0b, 0xb0, 0x0d, 0xa7, 0xd0, 0x0b, 0xb0, 0x3d, 0x1d, 0xd0,
        0x0b, 0xa0, 0xde, 0x04, 0xe0, 0x0a, 0x80, 0x8f, 0x00, 0xf1, 0x07, 0x60, 0x6f, 0x00, 0xf8, 0x03,
        0xd1, 0xfa, 0xbb, 0x8f, 0x00, 0x64, 0x40, 0x88, 0x04, 0x8f, 0x00, 0x8e, 0x00, 0x01, 0x20, 0x5d,
        0x82, 0x00, 0x01, 0x20, 0x6f, 0x82, 0x00, 0x24, 0x20, 0xef, 0xdd, 0x7c, 0x01, 0x20, 0x9f, 0x66,
        0xfa, 0x0a, 0x20, 0x6f, 0x00, 0xa0, 0x1f, 0x20, 0x6f, 0x00, 0x80, 0x2f, 0x20, 0x6f, 0x00, 0xc0,
        0x0f, 0x20, 0xbf, 0xa9, 0xfd, 0x07, 0x20, 0xbf, 0x99, 0x37, 0x00, 0x20, 0x6f, 0x82, 0x00, 0x01,
        0x20, 0x6f, 0x82, 0x00, 0x01, 0x10, 0x26, 0x91, 0x00, 0x8a, 0x00, 0x3e, 0x20, 0x56, 0x02, 0x00,
        0x00, 0xf8, 0xcc, 0x5f, 0x00, 0x10, 0x7f, 0x00, 0xd8, 0x00, 0x40, 0x3f, 0x20, 0xf9, 0x01, 0x40,
        0x2f, 0xe3, 0x06, 0x00, 0x40, 0x2f, 0xb9, 0x00, 0x00, 0x40, 0x2f, 0xe8, 0x02, 0x00, 0x40, 0x2f,
        0xc1, 0x7f, 0x00, 0x40, 0x2f, 0x00, 0xf7, 0x08, 0x40, 0x2f, 0x00, 0x80, 0x0e, 0x40, 0x2f, 0x00,
        0x70, 0x0f, 0x40, 0x6f, 0x9c, 0xfa, 0x08, 0x10, 0x26, 0x86, 0x48, 0x8f, 0x00, 0x99, 0x00, 0x30,
        0x43, 0x01, 0x44, 0x00, 0xc0, 0xee, 0xbd, 0xee, 0x0b, 0x30, 0x00, 0xec, 0x21, 0x3f, 0x00, 0x00,
        0xb8, 0x00, 0x5d, 0x10, 0x97, 0xec, 0x99, 0x6e, 0xd0, 0x8c, 0xdb, 0x88, 0x38, 0xe5, 0x00, 0xb9,
        0x00, 0x00, 0xe5, 0x00, 0xdb, 0x00, 0x10, 0xe1, 0xac, 0xce, 0x9c, 0x4c, 0x20, 0x88, 0x12, 0x87,
        0x05, 0x8e, 0x00, 0x8a, 0x00, 0x01, 0x61, 0x03, 0x82, 0x00, 0x39, 0x80, 0x7e, 0x6b, 0x00, 0x00,
        0xb5, 0xfe, 0x03, 0x00, 0x00, 0x24, 0xc1, 0x0b, 0x00, 0x00, 0x91, 0xed, 0x7f, 0x00, 0x00, 0xdd,
        0x45, 0xea, 0x01, 0x50, 0x3f, 0x00, 0xf2, 0x05, 0x90, 0x0e, 0x00, 0xe0, 0x08, 0x90, 0x0d, 0x00,
        0xd0, 0x09, 0x80, 0x0e, 0x00, 0xe0, 0x08, 0x30, 0x6f, 0x00, 0xf6, 0x03, 0x00, 0xf9, 0xaa, 0x9f,
        0x00, 0x00, 0x40, 0x88, 0x04, 0x8f, 0x00, 0x9a, 0x00, 0x00, 0x33, 0x83, 0x00, 0x00, 0xdd, 0x83,
        0x00, 0x03, 0x88, 0x00, 0x00, 0x20, 0x82, 0x22, 0x01, 0x02, 0xf0, 0x82, 0xff, 0x01, 0x0f, 0x20,
        0x82, 0x22, 0x03, 0x02, 0x00, 0x00, 0x88, 0x83, 0x00, 0x00, 0xdd, 0x83, 0x00, 0x00, 0x33, 0x95,
        0x00, 0x99, 0x00, 0x2f, 0x10, 0x44, 0x01, 0x18, 0x00, 0xf5, 0xee, 0xbf, 0x09, 0x20, 0x9f, 0x00,
        0xfb, 0x02, 0x70, 0x1f, 0x40, 0xfd, 0x07, 0x90, 0x0d, 0xd2, 0xd2, 0x09, 0x90, 0x1d, 0x4c, 0xd0,
        0x09, 0x80, 0xbf, 0x07, 0xf0, 0x08, 0x30, 0xbf, 0x00, 0xf6, 0x03, 0x70, 0xfe, 0xaa, 0x9f, 0x00,
        0xc1, 0x41, 0x88, 0x04, 0x8f, 0x00, 0x89, 0x00, 0x01, 0x20, 0x18, 0x82, 0x00, 0x01, 0x40, 0x2f,
        0x82, 0x00, 0x01, 0x40, 0x2f, 0x82, 0x00, 0x33, 0x40, 0x2f, 0x42, 0x02, 0x00, 0x40, 0x8f, 0xef,
        0x7f, 0x00, 0x40, 0xcf, 0x01, 0xf7, 0x03, 0x40, 0x6f, 0x00, 0xe0, 0x08, 0x40, 0x3f, 0x00, 0xb0,
        0x0a, 0x40, 0x3f, 0x00, 0xb0, 0x0b, 0x40, 0x4f, 0x00, 0xd0, 0x09, 0x40, 0xaf, 0x00, 0xf4, 0x05,
        0x40, 0xcf, 0xab, 0xbe, 0x00, 0x40, 0x2f, 0x86, 0x06, 0x00, 0x40, 0x2f, 0x82, 0x00, 0x01, 0x40,
        0x2f, 0x82, 0x00, 0x01, 0x20, 0x19, 0x82, 0x00, 0x8a, 0x00, 0x01, 0xe2, 0x05, 0x82, 0x00, 0x01,
        0x40, 0x2e, 0x83, 0x00, 0x00, 0xa6, 0xc2, 0x00, 0x8b, 0x00, 0x01, 0x50, 0x2e, 0x82, 0x00, 0x01,
        0xe2, 0x04, 0x82, 0x00, 0x00, 0x6a, 0xc2, 0x00, 0x8b, 0x00, 0x00, 0xdd, 0x82, 0x00, 0x07, 0x80,
        0x99, 0x08, 0x00, 0x00, 0xb2, 0x11, 0x2b, 0xc1, 0x00, 0x8a, 0x00, 0x0c, 0x80, 0x08, 0x55, 0x00,
        0x00, 0xb5, 0xb9, 0x4c, 0x00, 0x00, 0x44, 0x50, 0x05, 0xc1, 0x00, 0x8a, 0x00, 0x07, 0x20, 0x22,
        0x02, 0x00, 0x00, 0xf4, 0xff, 0x4f, 0xc6, 0x00, 0x89, 0x00, 0x00, 0x64, 0x82, 0x66, 0x01, 0x46,
        0x42, 0x82, 0x44, 0x00, 0x24, 0xc5, 0x00, 0x8a, 0x00, 0x0c, 0x84, 0x00, 0x48, 0x00, 0x00, 0xd1,
        0xbb, 0x1d, 0x00, 0x00, 0x10, 0x55, 0x01, 0xc1, 0x00, 0x8b, 0x00, 0x00, 0x44, 0x83, 0x00, 0x00,
        0xbb, 0x83, 0x00, 0x00, 0x11, 0xc2, 0x00, 0x8a, 0x00, 0x0c, 0x61, 0x11, 0x16, 0x00, 0x00, 0xf4,
        0x44, 0x4f, 0x00, 0x00, 0x20, 0x00, 0x02, 0xc1, 0x00, 0x02, 0x00, 0x00, 0x22, 0x82, 0x00, 0x11,
        0x80, 0xdd, 0x08, 0x00, 0x00, 0xe1, 0x00, 0x1e, 0x00, 0x00, 0xe0, 0x33, 0x0e, 0x00, 0x00, 0x40,
        0xcd, 0x04, 0xc1, 0x00, 0xc7, 0x00, 0x00, 0x81, 0x83, 0x00, 0x0c, 0xa0, 0x05, 0x00, 0x00, 0x70,
        0xe9, 0x05, 0x00, 0x00, 0x20, 0x35, 0x00, 0x00, 0x8f, 0x00, 0x82, 0xdd, 0x07, 0x0d, 0x00, 0xaf,
        0x66, 0x66, 0x06, 0x00, 0x8f, 0x83, 0x00, 0x00, 0x8f, 0x83, 0x00, 0x00, 0x8f, 0x83, 0x00, 0x00,
        0x8f, 0x83, 0x00, 0x00, 0x8f, 0x83, 0x00, 0x00, 0x8f, 0x83, 0x00, 0x00, 0x8f, 0x83, 0x00, 0x00,
        0x8f, 0x83, 0x00, 0x00, 0x8f, 0x83, 0x00, 0x00, 0x36, 0x91, 0x00, 0x8f, 0x00, 0x36, 0x10, 0xdd,
        0x01, 0x00, 0x00, 0x50, 0xee, 0x05, 0x00, 0x00, 0xa0, 0xbb, 0x0a, 0x00, 0x00, 0xe0, 0x66, 0x0e,
        0x00, 0x00, 0xf4, 0x22, 0x4f, 0x00, 0x00, 0xd9, 0x00, 0x9d, 0x00, 0x00, 0x9d, 0x00, 0xd9, 0x00,
        0x30, 0x4f, 0x00, 0xf4, 0x03, 0x80, 0x0f, 0x00, 0xf1, 0x08, 0xc0, 0x0b, 0x00, 0xb0, 0x0c, 0xf2,
        0xde, 0xdd, 0xed, 0x2f, 0x62, 0x82, 0x66, 0x00, 0x26, 0x8e, 0x00, 0x8e, 0x00, 0x00, 0xa0, 0x82,
        0xdd, 0x07, 0x0b, 0x90, 0x7f, 0x66, 0x66, 0x05, 0x10, 0xbc, 0x83, 0x00, 0x01, 0xe2, 0x08, 0x82,
        0x00, 0x01, 0x40, 0x5f, 0x83, 0x00, 0x05, 0xe8, 0x01, 0x00, 0x00, 0x10, 0xad, 0x82, 0x00, 0x01,
        0xb0, 0x1c, 0x82, 0x00, 0x05, 0xe8, 0x02, 0x00, 0x00, 0x40, 0x4f, 0x82, 0x00, 0x05, 0xb0, 0xdf,
        0xdd, 0xdd, 0x0b, 0x40, 0x82, 0x66, 0x00, 0x05, 0x8e, 0x00, 0x8f, 0x00, 0x3a, 0x50, 0x99, 0x05,
        0x00, 0x00, 0xfa, 0xaa, 0xaf, 0x00, 0x60, 0x4f, 0x00, 0xf4, 0x06, 0xb0, 0x0b, 0x00, 0xb0, 0x0b,
        0xe0, 0x08, 0x00, 0x80, 0x0e, 0xf0, 0x08, 0x00, 0x80, 0x0f, 0xe0, 0x08, 0x00, 0x80, 0x0e, 0xb0,
        0x0b, 0x00, 0xb0, 0x0b, 0x50, 0x2f, 0x00, 0xf2, 0x05, 0x00, 0xba, 0x11, 0xab, 0x00, 0xf2, 0xff,
        0x66, 0xff, 0x2f, 0x61, 0x66, 0x22, 0x66, 0x16, 0x8e, 0x00, 0x99, 0x00, 0x30, 0x30, 0x14, 0x10,
        0x02, 0x10, 0xfb, 0xee, 0x83, 0x0a, 0x90, 0x2e, 0xb0, 0xdb, 0x05, 0xe0, 0x09, 0x40, 0xff, 0x01,
        0xf2, 0x06, 0x10, 0xaf, 0x00, 0xf2, 0x06, 0x00, 0x6e, 0x00, 0xf0, 0x07, 0x40, 0x8f, 0x00, 0xb0,
        0x1c, 0xa0, 0xcf, 0x00, 0x30, 0xce, 0xfb, 0xe5, 0x3e, 0x00, 0x72, 0x48, 0x20, 0x16, 0x8e, 0x00,
        0x8a, 0x00, 0x41, 0x50, 0x68, 0x02, 0x00, 0x00, 0xfb, 0xff, 0x5f, 0x00, 0x40, 0x5f, 0x10, 0xdb,
        0x00, 0x80, 0x0e, 0x00, 0xf6, 0x00, 0x80, 0x0d, 0x00, 0xd9, 0x00, 0x80, 0x0d, 0x95, 0x7f, 0x00,
        0x80, 0x2d, 0xff, 0x7f, 0x00, 0x80, 0x0d, 0x10, 0xf7, 0x07, 0x80, 0x0d, 0x00, 0xa0, 0x0b, 0x80,
        0x0d, 0x00, 0xa0, 0x0b, 0x80, 0x9f, 0x02, 0xe3, 0x08, 0x80, 0xff, 0xff, 0xcf, 0x01, 0x80, 0x2d,
        0x77, 0x04, 0x00, 0x80, 0x0d, 0x82, 0x00, 0x01, 0x80, 0x0d, 0x82, 0x00, 0x01, 0x50, 0x08, 0x82,
        0x00, 0x98, 0x00, 0x2b, 0x11, 0x00, 0x00, 0x10, 0x02, 0xf6, 0x09, 0x00, 0xb0, 0x0a, 0x61, 0x3f,
        0x00, 0xf2, 0x04, 0x00, 0x8c, 0x00, 0xe8, 0x00, 0x00, 0xe7, 0x00, 0x8d, 0x00, 0x00, 0xf2, 0x44,
        0x3f, 0x00, 0x00, 0xb0, 0xaa, 0x0c, 0x00, 0x00, 0x60, 0xff, 0x06, 0x00, 0x00, 0x10, 0xff, 0x01,
        0x82, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x00, 0xbb, 0x83, 0x00, 0x02, 0x77,
        0x00, 0x00, 0x8a, 0x00, 0x3e, 0x30, 0x87, 0x16, 0x00, 0x00, 0xf8, 0xbd, 0x8d, 0x00, 0x00, 0xaf,
        0x00, 0x10, 0x00, 0x00, 0xcd, 0x45, 0x01, 0x00, 0x00, 0xf7, 0xee, 0x5e, 0x00, 0x20, 0x9f, 0x00,
        0xf9, 0x02, 0x70, 0x1f, 0x00, 0xf1, 0x07, 0x90, 0x0d, 0x00, 0xd0, 0x09, 0x90, 0x0d, 0x00, 0xd0,
        0x09, 0x80, 0x0f, 0x00, 0xf0, 0x08, 0x30, 0x6f, 0x00, 0xf6, 0x03, 0x00, 0xf9, 0xaa, 0x9f, 0x00,
        0x00, 0x40, 0x88, 0x04, 0x8f, 0x00, 0x99, 0x00, 0x0f, 0x10, 0x44, 0x13, 0x00, 0x00, 0xf6, 0xdf,
        0xff, 0x02, 0x10, 0x8f, 0x00, 0x30, 0x01, 0x10, 0x7e, 0x83, 0x00, 0x0a, 0xd3, 0xbd, 0x07, 0x00,
        0x00, 0xcb, 0x66, 0x04, 0x00, 0x50, 0x1f, 0x82, 0x00, 0x0e, 0x40, 0x4f, 0x00, 0x00, 0x01, 0x00,
        0xfa, 0xbc, 0xeb, 0x06, 0x00, 0x30, 0x87, 0x57, 0x01, 0x8e, 0x00, 0x8a, 0x00, 0x00, 0x45, 0x83,
        0x00, 0x01, 0xfa, 0x1d, 0x82, 0x00, 0x01, 0x30, 0x6f, 0x83, 0x00, 0x00, 0xcb, 0x83, 0x00, 0x2a,
        0xf9, 0x02, 0x00, 0x00, 0x10, 0xfe, 0x08, 0x00, 0x00, 0x70, 0xbf, 0x0d, 0x00, 0x00, 0xe0, 0x39,
        0x4f, 0x00, 0x00, 0xf6, 0x02, 0xad, 0x00, 0x00, 0xac, 0x00, 0xf7, 0x01, 0x40, 0x3f, 0x00, 0xf2,
        0x06, 0xb0, 0x0b, 0x00, 0xb0, 0x0b, 0x60, 0x02, 0x00, 0x30, 0x06, 0x8e, 0x00, 0x98, 0x00, 0x00,
        0x20, 0x82, 0x22, 0x01, 0x02, 0xf0, 0x82, 0xff, 0x28, 0x0f, 0x40, 0x8f, 0x44, 0xf8, 0x04, 0x00,
        0x6f, 0x00, 0xf6, 0x00, 0x00, 0x6f, 0x00, 0xf6, 0x00, 0x00, 0x6f, 0x00, 0xf6, 0x00, 0x00, 0x6f,
        0x00, 0xf6, 0x00, 0x00, 0x6f, 0x00, 0xf6, 0x00, 0x00, 0x6f, 0x00, 0xf4, 0x29, 0x00, 0x26, 0x00,
        0x80, 0x29, 0x8e, 0x00, 0xa5, 0x00, 0x00, 0x11, 0x83, 0x00, 0x0b, 0xb7, 0x01, 0x81, 0x88, 0x88,
        0xe8, 0x0b, 0xb1, 0xbb, 0xbb, 0xeb, 0x1e, 0x82, 0x00, 0x01, 0xd5, 0x02, 0x82, 0x00, 0x00, 0x24,
        0x99, 0x00, 0xa0, 0x00, 0x1a, 0x61, 0x0b, 0x00, 0x20, 0xb7, 0xef, 0x0a, 0x80, 0xfc, 0x8c, 0x04,
        0x00, 0xf0, 0xaf, 0x04, 0x00, 0x00, 0x10, 0xa6, 0xef, 0x6a, 0x02, 0x00, 0x00, 0x51, 0xea, 0x0f,
        0x83, 0x00, 0x01, 0x04, 0xd0, 0x82, 0xdd, 0x01, 0x0d, 0x60, 0x82, 0x66, 0x00, 0x06, 0x8e, 0x00,
        0x9d, 0x00, 0x01, 0xb0, 0x16, 0x82, 0x00, 0x19, 0xa0, 0xfe, 0x7b, 0x02, 0x00, 0x00, 0x40, 0xc8,
        0xcf, 0x08, 0x00, 0x00, 0x40, 0xfa, 0x0f, 0x20, 0xa6, 0xfe, 0x6a, 0x01, 0xf0, 0xae, 0x15, 0x00,
        0x00, 0x40, 0x83, 0x00, 0x00, 0xd0, 0x82, 0xdd, 0x01, 0x0d, 0x60, 0x82, 0x66, 0x00, 0x06, 0x8e,
        0x00, 0x02, 0x00, 0x00, 0x11, 0x82, 0x00, 0x43, 0x10, 0xdd, 0x01, 0x00, 0x00, 0xd2, 0xde, 0x2d,
        0x00, 0x30, 0x39, 0x00, 0x81, 0x03, 0xe0, 0x76, 0xdc, 0x05, 0x0c, 0xf0, 0xff, 0xff, 0x0d, 0x09,
        0xf0, 0xff, 0xff, 0x08, 0x0c, 0xf0, 0xff, 0xaf, 0x80, 0x0f, 0xf0, 0xff, 0x0b, 0xf8, 0x0f, 0xf0,
        0xff, 0x35, 0xff, 0x0f, 0xf0, 0xff, 0x44, 0xff, 0x0f, 0xf0, 0xff, 0xbb, 0xff, 0x0f, 0x70, 0xff,
        0x88, 0xff, 0x07, 0x00, 0xf5, 0x44, 0x5f, 0x00, 0x00, 0x50, 0xaa, 0x04, 0x82, 0x00, 0x00, 0x44,
        0x8b, 0x00,
    ],
)
