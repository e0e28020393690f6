//! Static lookup tables for the creature data stored in each record.

use crate::record::GrowthRate::{self, *};

pub const SPECIES_COUNT: u16 = 386;

/// Internal species id -> national dex number (0 marks an unused id)
#[rustfmt::skip]
pub static INTERNAL_TO_NATIONAL: [u16; 412] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31,
    32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47,
    48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63,
    64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79,
    80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95,
    96, 97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111,
    112, 113, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127,
    128, 129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143,
    144, 145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158, 159,
    160, 161, 162, 163, 164, 165, 166, 167, 168, 169, 170, 171, 172, 173, 174, 175,
    176, 177, 178, 179, 180, 181, 182, 183, 184, 185, 186, 187, 188, 189, 190, 191,
    192, 193, 194, 195, 196, 197, 198, 199, 200, 201, 202, 203, 204, 205, 206, 207,
    208, 209, 210, 211, 212, 213, 214, 215, 216, 217, 218, 219, 220, 221, 222, 223,
    224, 225, 226, 227, 228, 229, 230, 231, 232, 233, 234, 235, 236, 237, 238, 239,
    240, 241, 242, 243, 244, 245, 246, 247, 248, 249, 250, 251, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 252, 253, 254, 255, 256, 257, 258, 259, 260, 261, 262,
    263, 264, 265, 266, 267, 268, 269, 270, 271, 272, 273, 274, 275, 290, 291, 292,
    276, 277, 285, 286, 327, 278, 279, 283, 284, 320, 321, 300, 301, 352, 343, 344,
    299, 324, 302, 339, 340, 370, 341, 342, 349, 350, 318, 319, 328, 329, 330, 296,
    297, 309, 310, 322, 323, 363, 364, 365, 331, 332, 361, 362, 337, 338, 298, 325,
    326, 311, 312, 303, 307, 308, 333, 334, 360, 355, 356, 315, 287, 288, 289, 316,
    317, 357, 293, 294, 295, 366, 367, 368, 359, 353, 354, 336, 335, 369, 304, 305,
    306, 351, 313, 314, 345, 346, 347, 348, 280, 281, 282, 371, 372, 373, 374, 375,
    376, 377, 378, 379, 382, 383, 384, 380, 381, 385, 386, 358,
];

/// National dex number -> internal species id
#[rustfmt::skip]
pub static NATIONAL_TO_INTERNAL: [u16; 387] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31,
    32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47,
    48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63,
    64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79,
    80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95,
    96, 97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111,
    112, 113, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127,
    128, 129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143,
    144, 145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158, 159,
    160, 161, 162, 163, 164, 165, 166, 167, 168, 169, 170, 171, 172, 173, 174, 175,
    176, 177, 178, 179, 180, 181, 182, 183, 184, 185, 186, 187, 188, 189, 190, 191,
    192, 193, 194, 195, 196, 197, 198, 199, 200, 201, 202, 203, 204, 205, 206, 207,
    208, 209, 210, 211, 212, 213, 214, 215, 216, 217, 218, 219, 220, 221, 222, 223,
    224, 225, 226, 227, 228, 229, 230, 231, 232, 233, 234, 235, 236, 237, 238, 239,
    240, 241, 242, 243, 244, 245, 246, 247, 248, 249, 250, 251, 277, 278, 279, 280,
    281, 282, 283, 284, 285, 286, 287, 288, 289, 290, 291, 292, 293, 294, 295, 296,
    297, 298, 299, 300, 304, 305, 309, 310, 392, 393, 394, 311, 312, 306, 307, 364,
    365, 366, 301, 302, 303, 370, 371, 372, 335, 336, 350, 320, 315, 316, 322, 355,
    382, 383, 384, 356, 357, 337, 338, 353, 354, 386, 387, 363, 367, 368, 330, 331,
    313, 314, 339, 340, 321, 351, 352, 308, 332, 333, 334, 344, 345, 358, 359, 380,
    379, 348, 349, 323, 324, 326, 327, 318, 319, 388, 389, 390, 391, 328, 329, 385,
    317, 377, 378, 361, 362, 369, 411, 376, 360, 346, 347, 341, 342, 343, 373, 374,
    375, 381, 325, 395, 396, 397, 398, 399, 400, 401, 402, 403, 407, 408, 404, 405,
    406, 409, 410,
];

/// Growth rate for each national dex number, starting at #1
#[rustfmt::skip]
pub static GROWTH_RATES: [GrowthRate; 386] = [
    MediumSlow, MediumSlow, MediumSlow, MediumSlow, MediumSlow, MediumSlow, MediumSlow, MediumSlow,
    MediumSlow, MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, MediumSlow,
    MediumSlow, MediumSlow, MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, MediumFast,
    MediumFast, MediumFast, MediumFast, MediumFast, MediumSlow, MediumSlow, MediumSlow, MediumSlow,
    MediumSlow, MediumSlow, Fast, Fast, MediumFast, MediumFast, Fast, Fast,
    MediumFast, MediumFast, MediumSlow, MediumSlow, MediumSlow, MediumFast, MediumFast, MediumFast,
    MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, MediumFast,
    MediumFast, Slow, Slow, MediumSlow, MediumSlow, MediumSlow, MediumSlow, MediumSlow,
    MediumSlow, MediumSlow, MediumSlow, MediumSlow, MediumSlow, MediumSlow, MediumSlow, Slow,
    Slow, MediumSlow, MediumSlow, MediumSlow, MediumFast, MediumFast, MediumFast, MediumFast,
    MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, MediumFast,
    MediumFast, Slow, Slow, MediumSlow, MediumSlow, MediumSlow, MediumFast, MediumFast,
    MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, Slow, Slow, MediumFast,
    MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, Slow, Slow,
    Fast, MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, Slow,
    Slow, MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, Slow, Slow,
    Slow, Slow, Slow, MediumFast, MediumFast, MediumFast, MediumFast, MediumFast,
    MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, Slow, Slow, Slow,
    Slow, Slow, Slow, Slow, Slow, Slow, MediumSlow, MediumSlow,
    MediumSlow, MediumSlow, MediumSlow, MediumSlow, MediumSlow, MediumSlow, MediumSlow, MediumSlow,
    MediumFast, MediumFast, MediumFast, MediumFast, Fast, Fast, Fast, Fast,
    MediumFast, Slow, Slow, MediumFast, Fast, Fast, Fast, Fast,
    MediumFast, MediumFast, MediumSlow, MediumSlow, MediumSlow, MediumSlow, Fast, Fast,
    MediumFast, MediumSlow, MediumSlow, MediumSlow, MediumSlow, Fast, MediumSlow, MediumSlow,
    MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, MediumSlow, MediumFast, Fast,
    MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, MediumSlow, MediumFast,
    Fast, Fast, MediumFast, MediumFast, MediumSlow, Slow, MediumSlow, MediumFast,
    MediumFast, MediumFast, MediumFast, Slow, Slow, Fast, MediumFast, MediumFast,
    Fast, Slow, Slow, Slow, Slow, MediumFast, MediumFast, MediumFast,
    MediumFast, Slow, Fast, MediumFast, MediumFast, MediumFast, MediumFast, MediumFast,
    Slow, Fast, Slow, Slow, Slow, Slow, Slow, Slow,
    Slow, Slow, MediumSlow, MediumSlow, MediumSlow, MediumSlow, MediumSlow, MediumSlow,
    MediumSlow, MediumSlow, MediumSlow, MediumSlow, MediumFast, MediumFast, MediumFast, MediumFast,
    MediumFast, MediumFast, MediumFast, MediumFast, MediumFast, MediumSlow, MediumSlow, MediumSlow,
    MediumSlow, MediumSlow, MediumSlow, MediumSlow, MediumSlow, MediumFast, MediumFast, Slow,
    Slow, Slow, MediumFast, MediumFast, Fluctuating, Fluctuating, Slow, Slow,
    Slow, Erratic, Erratic, Erratic, MediumSlow, MediumSlow, MediumSlow, Fluctuating,
    Fluctuating, Fast, MediumFast, Fast, Fast, MediumSlow, Fast, Slow,
    Slow, Slow, MediumFast, MediumFast, Slow, Slow, MediumFast, MediumFast,
    Erratic, Fluctuating, MediumSlow, Fluctuating, Fluctuating, Slow, Slow, Fluctuating,
    Fluctuating, MediumFast, MediumFast, MediumFast, Fast, Fast, Fast, MediumSlow,
    MediumSlow, MediumSlow, MediumSlow, MediumSlow, Erratic, Erratic, Erratic, Fluctuating,
    Fast, Fast, MediumFast, MediumFast, Fluctuating, Fluctuating, MediumFast, MediumFast,
    Erratic, Erratic, Erratic, Erratic, Erratic, Erratic, MediumFast, MediumSlow,
    Fast, Fast, Fast, Fast, Slow, Fast, MediumSlow, MediumFast,
    MediumFast, MediumFast, MediumSlow, MediumSlow, MediumSlow, Erratic, Erratic, Erratic,
    Slow, Fast, Slow, Slow, Slow, Slow, Slow, Slow,
    Slow, Slow, Slow, Slow, Slow, Slow, Slow, Slow,
    Slow, Slow,
];

/// Total experience needed to reach each level, starting at level 1
#[rustfmt::skip]
pub static ERRATIC_EXP: [u32; 100] = [
    0, 15, 52, 122, 237, 406, 637, 942, 1326, 1800,
    2369, 3041, 3822, 4719, 5737, 6881, 8155, 9564, 11111, 12800,
    14632, 16610, 18737, 21012, 23437, 26012, 28737, 31610, 34632, 37800,
    41111, 44564, 48155, 51881, 55737, 59719, 63822, 68041, 72369, 76800,
    81326, 85942, 90637, 95406, 100237, 105122, 110052, 115015, 120001, 125000,
    131324, 137795, 144410, 151165, 158056, 165079, 172229, 179503, 186894, 194400,
    202013, 209728, 217540, 225443, 233431, 241496, 249633, 257834, 267406, 276458,
    286328, 296358, 305767, 316074, 326531, 336255, 346965, 357812, 367807, 378880,
    390077, 400293, 411686, 423190, 433572, 445239, 457001, 467489, 479378, 491346,
    501878, 513934, 526049, 536557, 548720, 560922, 571333, 583539, 591882, 600000,
];

#[rustfmt::skip]
pub static FLUCTUATING_EXP: [u32; 100] = [
    0, 4, 13, 32, 65, 112, 178, 276, 393, 540,
    745, 967, 1230, 1591, 1957, 2457, 3046, 3732, 4526, 5440,
    6482, 7666, 9003, 10506, 12187, 14060, 16140, 18439, 20974, 23760,
    26811, 30146, 33780, 37731, 42017, 46656, 50653, 55969, 60505, 66560,
    71677, 78533, 84277, 91998, 98415, 107069, 114205, 123863, 131766, 142500,
    151222, 163105, 172697, 185807, 196322, 210739, 222231, 238036, 250562, 267840,
    281456, 300293, 315059, 335544, 351520, 373744, 390991, 415050, 433631, 459620,
    479600, 507617, 529063, 559209, 582187, 614566, 639146, 673863, 700115, 737280,
    765275, 804997, 834809, 877201, 908905, 954084, 987754, 1035837, 1071552, 1122660,
    1160499, 1214753, 1254796, 1312322, 1354652, 1415577, 1460276, 1524731, 1571884, 1640000,
];

#[rustfmt::skip]
pub static FAST_EXP: [u32; 100] = [
    0, 6, 21, 51, 100, 172, 274, 409, 583, 800,
    1064, 1382, 1757, 2195, 2700, 3276, 3930, 4665, 5487, 6400,
    7408, 8518, 9733, 11059, 12500, 14060, 15746, 17561, 19511, 21600,
    23832, 26214, 28749, 31443, 34300, 37324, 40522, 43897, 47455, 51200,
    55136, 59270, 63605, 68147, 72900, 77868, 83058, 88473, 94119, 100000,
    106120, 112486, 119101, 125971, 133100, 140492, 148154, 156089, 164303, 172800,
    181584, 190662, 200037, 209715, 219700, 229996, 240610, 251545, 262807, 274400,
    286328, 298598, 311213, 324179, 337500, 351180, 365226, 379641, 394431, 409600,
    425152, 441094, 457429, 474163, 491300, 508844, 526802, 545177, 563975, 583200,
    602856, 622950, 643485, 664467, 685900, 707788, 730138, 752953, 776239, 800000,
];

#[rustfmt::skip]
pub static SLOW_EXP: [u32; 100] = [
    0, 10, 33, 80, 156, 270, 428, 640, 911, 1250,
    1663, 2160, 2746, 3430, 4218, 5120, 6141, 7290, 8573, 10000,
    11576, 13310, 15208, 17280, 19531, 21970, 24603, 27440, 30486, 33750,
    37238, 40960, 44921, 49130, 53593, 58320, 63316, 68590, 74148, 80000,
    86151, 92610, 99383, 106480, 113906, 121670, 129778, 138240, 147061, 156250,
    165813, 175760, 186096, 196830, 207968, 219520, 231491, 243890, 256723, 270000,
    283726, 297910, 312558, 327680, 343281, 359370, 375953, 393040, 410636, 428750,
    447388, 466560, 486271, 506530, 527343, 548720, 570666, 593190, 616298, 640000,
    664301, 689210, 714733, 740880, 767656, 795070, 823128, 851840, 881211, 911250,
    941963, 973360, 1005446, 1038230, 1071718, 1105920, 1140841, 1176490, 1212873, 1250000,
];

#[rustfmt::skip]
pub static MEDIUM_FAST_EXP: [u32; 100] = [
    0, 8, 27, 64, 125, 216, 343, 512, 729, 1000,
    1331, 1728, 2197, 2744, 3375, 4096, 4913, 5832, 6859, 8000,
    9261, 10648, 12167, 13824, 15625, 17576, 19683, 21952, 24389, 27000,
    29791, 32768, 35937, 39304, 42875, 46656, 50653, 54872, 59319, 64000,
    68921, 74088, 79507, 85184, 91125, 97336, 103823, 110592, 117649, 125000,
    132651, 140608, 148877, 157464, 166375, 175616, 185193, 195112, 205379, 216000,
    226981, 238328, 250047, 262144, 274625, 287496, 300763, 314432, 328509, 343000,
    357911, 373248, 389017, 405224, 421875, 438976, 456533, 474552, 493039, 512000,
    531441, 551368, 571787, 592704, 614125, 636056, 658503, 681472, 704969, 729000,
    753571, 778688, 804357, 830584, 857375, 884736, 912673, 941192, 970299, 1000000,
];

#[rustfmt::skip]
pub static MEDIUM_SLOW_EXP: [u32; 100] = [
    0, 9, 57, 96, 135, 179, 236, 314, 419, 560,
    742, 973, 1261, 1612, 2035, 2535, 3120, 3798, 4575, 5460,
    6458, 7577, 8825, 10208, 11735, 13411, 15244, 17242, 19411, 21760,
    24294, 27021, 29949, 33084, 36435, 40007, 43808, 47846, 52127, 56660,
    61450, 66505, 71833, 77440, 83335, 89523, 96012, 102810, 109923, 117360,
    125126, 133229, 141677, 150476, 159635, 169159, 179056, 189334, 199999, 211060,
    222522, 234393, 246681, 259392, 272535, 286115, 300140, 314618, 329555, 344960,
    360838, 377197, 394045, 411388, 429235, 447591, 466464, 485862, 505791, 526260,
    547274, 568841, 590969, 613664, 636935, 660787, 685228, 710266, 735907, 762160,
    789030, 816525, 844653, 873420, 902835, 932903, 963632, 995030, 1027103, 1059860,
];

/// Character set used for names (base64 alphabet only)
#[rustfmt::skip]
pub static CHARSET: [(char, u8); 65] = [
    ('A', 0xBB), ('B', 0xBC), ('C', 0xBD), ('D', 0xBE), ('E', 0xBF), ('F', 0xC0),
    ('G', 0xC1), ('H', 0xC2), ('I', 0xC3), ('J', 0xC4), ('K', 0xC5), ('L', 0xC6),
    ('M', 0xC7), ('N', 0xC8), ('O', 0xC9), ('P', 0xCA), ('Q', 0xCB), ('R', 0xCC),
    ('S', 0xCD), ('T', 0xCE), ('U', 0xCF), ('V', 0xD0), ('W', 0xD1), ('X', 0xD2),
    ('Y', 0xD3), ('Z', 0xD4), ('a', 0xD5), ('b', 0xD6), ('c', 0xD7), ('d', 0xD8),
    ('e', 0xD9), ('f', 0xDA), ('g', 0xDB), ('h', 0xDC), ('i', 0xDD), ('j', 0xDE),
    ('k', 0xDF), ('l', 0xE0), ('m', 0xE1), ('n', 0xE2), ('o', 0xE3), ('p', 0xE4),
    ('q', 0xE5), ('r', 0xE6), ('s', 0xE7), ('t', 0xE8), ('u', 0xE9), ('v', 0xEA),
    ('w', 0xEB), ('x', 0xEC), ('y', 0xED), ('z', 0xEE), ('0', 0xA1), ('1', 0xA2),
    ('2', 0xA3), ('3', 0xA4), ('4', 0xA5), ('5', 0xA6), ('6', 0xA7), ('7', 0xA8),
    ('8', 0xA9), ('9', 0xAA), ('+', 0x2E), ('/', 0xBA), ('=', 0x35),
];
