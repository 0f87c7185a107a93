//! Built-in surah reference data.
//!
//! Juz boundaries follow the standard 30-part division. Page annotations on
//! multi-Juz surahs are taken from the 15-line Madani mushaf (604 pages).

use crate::models::{JuzBoundary, SurahInfo};

const fn surah(
    number: u8,
    name: &'static str,
    arabic_name: &'static str,
    total_ayahs: u16,
    juz_start: u8,
    juz_end: Option<u8>,
    juz_boundaries: &'static [JuzBoundary],
) -> SurahInfo {
    SurahInfo {
        number,
        name,
        arabic_name,
        total_ayahs,
        juz_start,
        juz_end,
        juz_boundaries,
    }
}

pub(crate) static SURAHS: [SurahInfo; 114] = [
    surah(1, "Al-Fatihah", "الفاتحة", 7, 1, None, &[]),
    surah(
        2,
        "Al-Baqarah",
        "البقرة",
        286,
        1,
        Some(3),
        &[
            JuzBoundary::paged(1, 1, Some(141), 2, 21),
            JuzBoundary::paged(2, 142, Some(252), 22, 41),
            JuzBoundary::paged(3, 253, None, 42, 49),
        ],
    ),
    surah(
        3,
        "Ali 'Imran",
        "آل عمران",
        200,
        3,
        Some(4),
        &[
            JuzBoundary::paged(3, 1, Some(92), 50, 61),
            JuzBoundary::paged(4, 93, None, 62, 76),
        ],
    ),
    surah(
        4,
        "An-Nisa",
        "النساء",
        176,
        4,
        Some(6),
        &[
            JuzBoundary::paged(4, 1, Some(23), 77, 81),
            JuzBoundary::paged(5, 24, Some(147), 82, 101),
            JuzBoundary::paged(6, 148, None, 102, 106),
        ],
    ),
    surah(
        5,
        "Al-Ma'idah",
        "المائدة",
        120,
        6,
        Some(7),
        &[
            JuzBoundary::paged(6, 1, Some(82), 106, 120),
            JuzBoundary::paged(7, 83, None, 121, 127),
        ],
    ),
    surah(
        6,
        "Al-An'am",
        "الأنعام",
        165,
        7,
        Some(8),
        &[
            JuzBoundary::paged(7, 1, Some(110), 128, 141),
            JuzBoundary::paged(8, 111, None, 142, 150),
        ],
    ),
    surah(
        7,
        "Al-A'raf",
        "الأعراف",
        206,
        8,
        Some(9),
        &[
            JuzBoundary::paged(8, 1, Some(87), 151, 161),
            JuzBoundary::paged(9, 88, None, 162, 176),
        ],
    ),
    surah(
        8,
        "Al-Anfal",
        "الأنفال",
        75,
        9,
        Some(10),
        &[
            JuzBoundary::paged(9, 1, Some(40), 177, 181),
            JuzBoundary::paged(10, 41, None, 182, 186),
        ],
    ),
    surah(
        9,
        "At-Tawbah",
        "التوبة",
        129,
        10,
        Some(11),
        &[
            JuzBoundary::paged(10, 1, Some(92), 187, 200),
            JuzBoundary::paged(11, 93, None, 201, 207),
        ],
    ),
    surah(10, "Yunus", "يونس", 109, 11, None, &[]),
    surah(
        11,
        "Hud",
        "هود",
        123,
        11,
        Some(12),
        &[
            JuzBoundary::paged(11, 1, Some(5), 221, 221),
            JuzBoundary::paged(12, 6, None, 222, 235),
        ],
    ),
    surah(
        12,
        "Yusuf",
        "يوسف",
        111,
        12,
        Some(13),
        &[
            JuzBoundary::paged(12, 1, Some(52), 235, 241),
            JuzBoundary::paged(13, 53, None, 242, 248),
        ],
    ),
    surah(13, "Ar-Ra'd", "الرعد", 43, 13, None, &[]),
    surah(14, "Ibrahim", "إبراهيم", 52, 13, None, &[]),
    surah(15, "Al-Hijr", "الحجر", 99, 14, None, &[]),
    surah(16, "An-Nahl", "النحل", 128, 14, None, &[]),
    surah(17, "Al-Isra", "الإسراء", 111, 15, None, &[]),
    surah(
        18,
        "Al-Kahf",
        "الكهف",
        110,
        15,
        Some(16),
        &[
            JuzBoundary::paged(15, 1, Some(74), 293, 301),
            JuzBoundary::paged(16, 75, None, 302, 304),
        ],
    ),
    surah(19, "Maryam", "مريم", 98, 16, None, &[]),
    surah(20, "Taha", "طه", 135, 16, None, &[]),
    surah(21, "Al-Anbya", "الأنبياء", 112, 17, None, &[]),
    surah(22, "Al-Hajj", "الحج", 78, 17, None, &[]),
    surah(23, "Al-Mu'minun", "المؤمنون", 118, 18, None, &[]),
    surah(24, "An-Nur", "النور", 64, 18, None, &[]),
    surah(
        25,
        "Al-Furqan",
        "الفرقان",
        77,
        18,
        Some(19),
        &[
            JuzBoundary::paged(18, 1, Some(20), 359, 361),
            JuzBoundary::paged(19, 21, None, 362, 366),
        ],
    ),
    surah(26, "Ash-Shu'ara", "الشعراء", 227, 19, None, &[]),
    surah(
        27,
        "An-Naml",
        "النمل",
        93,
        19,
        Some(20),
        &[
            JuzBoundary::paged(19, 1, Some(55), 377, 381),
            JuzBoundary::paged(20, 56, None, 382, 385),
        ],
    ),
    surah(28, "Al-Qasas", "القصص", 88, 20, None, &[]),
    surah(
        29,
        "Al-'Ankabut",
        "العنكبوت",
        69,
        20,
        Some(21),
        &[
            JuzBoundary::paged(20, 1, Some(45), 396, 401),
            JuzBoundary::paged(21, 46, None, 402, 404),
        ],
    ),
    surah(30, "Ar-Rum", "الروم", 60, 21, None, &[]),
    surah(31, "Luqman", "لقمان", 34, 21, None, &[]),
    surah(32, "As-Sajdah", "السجدة", 30, 21, None, &[]),
    surah(
        33,
        "Al-Ahzab",
        "الأحزاب",
        73,
        21,
        Some(22),
        &[
            JuzBoundary::paged(21, 1, Some(30), 418, 421),
            JuzBoundary::paged(22, 31, None, 422, 427),
        ],
    ),
    surah(34, "Saba", "سبإ", 54, 22, None, &[]),
    surah(35, "Fatir", "فاطر", 45, 22, None, &[]),
    surah(
        36,
        "Ya-Sin",
        "يس",
        83,
        22,
        Some(23),
        &[
            JuzBoundary::paged(22, 1, Some(27), 440, 441),
            JuzBoundary::paged(23, 28, None, 442, 445),
        ],
    ),
    surah(37, "As-Saffat", "الصافات", 182, 23, None, &[]),
    surah(38, "Sad", "ص", 88, 23, None, &[]),
    surah(
        39,
        "Az-Zumar",
        "الزمر",
        75,
        23,
        Some(24),
        &[
            JuzBoundary::paged(23, 1, Some(31), 458, 461),
            JuzBoundary::paged(24, 32, None, 462, 467),
        ],
    ),
    surah(40, "Ghafir", "غافر", 85, 24, None, &[]),
    surah(
        41,
        "Fussilat",
        "فصلت",
        54,
        24,
        Some(25),
        &[
            JuzBoundary::paged(24, 1, Some(46), 477, 481),
            JuzBoundary::paged(25, 47, None, 482, 483),
        ],
    ),
    surah(42, "Ash-Shuraa", "الشورى", 53, 25, None, &[]),
    surah(43, "Az-Zukhruf", "الزخرف", 89, 25, None, &[]),
    surah(44, "Ad-Dukhan", "الدخان", 59, 25, None, &[]),
    surah(45, "Al-Jathiyah", "الجاثية", 37, 25, None, &[]),
    surah(46, "Al-Ahqaf", "الأحقاف", 35, 26, None, &[]),
    surah(47, "Muhammad", "محمد", 38, 26, None, &[]),
    surah(48, "Al-Fath", "الفتح", 29, 26, None, &[]),
    surah(49, "Al-Hujurat", "الحجرات", 18, 26, None, &[]),
    surah(50, "Qaf", "ق", 45, 26, None, &[]),
    surah(
        51,
        "Adh-Dhariyat",
        "الذاريات",
        60,
        26,
        Some(27),
        &[
            JuzBoundary::paged(26, 1, Some(30), 520, 521),
            JuzBoundary::paged(27, 31, None, 522, 523),
        ],
    ),
    surah(52, "At-Tur", "الطور", 49, 27, None, &[]),
    surah(53, "An-Najm", "النجم", 62, 27, None, &[]),
    surah(54, "Al-Qamar", "القمر", 55, 27, None, &[]),
    surah(55, "Ar-Rahman", "الرحمن", 78, 27, None, &[]),
    surah(56, "Al-Waqi'ah", "الواقعة", 96, 27, None, &[]),
    surah(57, "Al-Hadid", "الحديد", 29, 27, None, &[]),
    surah(58, "Al-Mujadila", "المجادلة", 22, 28, None, &[]),
    surah(59, "Al-Hashr", "الحشر", 24, 28, None, &[]),
    surah(60, "Al-Mumtahanah", "الممتحنة", 13, 28, None, &[]),
    surah(61, "As-Saf", "الصف", 14, 28, None, &[]),
    surah(62, "Al-Jumu'ah", "الجمعة", 11, 28, None, &[]),
    surah(63, "Al-Munafiqun", "المنافقون", 11, 28, None, &[]),
    surah(64, "At-Taghabun", "التغابن", 18, 28, None, &[]),
    surah(65, "At-Talaq", "الطلاق", 12, 28, None, &[]),
    surah(66, "At-Tahrim", "التحريم", 12, 28, None, &[]),
    surah(67, "Al-Mulk", "الملك", 30, 29, None, &[]),
    surah(68, "Al-Qalam", "القلم", 52, 29, None, &[]),
    surah(69, "Al-Haqqah", "الحاقة", 52, 29, None, &[]),
    surah(70, "Al-Ma'arij", "المعارج", 44, 29, None, &[]),
    surah(71, "Nuh", "نوح", 28, 29, None, &[]),
    surah(72, "Al-Jinn", "الجن", 28, 29, None, &[]),
    surah(73, "Al-Muzzammil", "المزمل", 20, 29, None, &[]),
    surah(74, "Al-Muddaththir", "المدثر", 56, 29, None, &[]),
    surah(75, "Al-Qiyamah", "القيامة", 40, 29, None, &[]),
    surah(76, "Al-Insan", "الإنسان", 31, 29, None, &[]),
    surah(77, "Al-Mursalat", "المرسلات", 50, 29, None, &[]),
    surah(78, "An-Naba", "النبأ", 40, 30, None, &[]),
    surah(79, "An-Nazi'at", "النازعات", 46, 30, None, &[]),
    surah(80, "'Abasa", "عبس", 42, 30, None, &[]),
    surah(81, "At-Takwir", "التكوير", 29, 30, None, &[]),
    surah(82, "Al-Infitar", "الانفطار", 19, 30, None, &[]),
    surah(83, "Al-Mutaffifin", "المطففين", 36, 30, None, &[]),
    surah(84, "Al-Inshiqaq", "الانشقاق", 25, 30, None, &[]),
    surah(85, "Al-Buruj", "البروج", 22, 30, None, &[]),
    surah(86, "At-Tariq", "الطارق", 17, 30, None, &[]),
    surah(87, "Al-A'la", "الأعلى", 19, 30, None, &[]),
    surah(88, "Al-Ghashiyah", "الغاشية", 26, 30, None, &[]),
    surah(89, "Al-Fajr", "الفجر", 30, 30, None, &[]),
    surah(90, "Al-Balad", "البلد", 20, 30, None, &[]),
    surah(91, "Ash-Shams", "الشمس", 15, 30, None, &[]),
    surah(92, "Al-Layl", "الليل", 21, 30, None, &[]),
    surah(93, "Ad-Duhaa", "الضحى", 11, 30, None, &[]),
    surah(94, "Ash-Sharh", "الشرح", 8, 30, None, &[]),
    surah(95, "At-Tin", "التين", 8, 30, None, &[]),
    surah(96, "Al-'Alaq", "العلق", 19, 30, None, &[]),
    surah(97, "Al-Qadr", "القدر", 5, 30, None, &[]),
    surah(98, "Al-Bayyinah", "البينة", 8, 30, None, &[]),
    surah(99, "Az-Zalzalah", "الزلزلة", 8, 30, None, &[]),
    surah(100, "Al-'Adiyat", "العاديات", 11, 30, None, &[]),
    surah(101, "Al-Qari'ah", "القارعة", 11, 30, None, &[]),
    surah(102, "At-Takathur", "التكاثر", 8, 30, None, &[]),
    surah(103, "Al-'Asr", "العصر", 3, 30, None, &[]),
    surah(104, "Al-Humazah", "الهمزة", 9, 30, None, &[]),
    surah(105, "Al-Fil", "الفيل", 5, 30, None, &[]),
    surah(106, "Quraysh", "قريش", 4, 30, None, &[]),
    surah(107, "Al-Ma'un", "الماعون", 7, 30, None, &[]),
    surah(108, "Al-Kawthar", "الكوثر", 3, 30, None, &[]),
    surah(109, "Al-Kafirun", "الكافرون", 6, 30, None, &[]),
    surah(110, "An-Nasr", "النصر", 3, 30, None, &[]),
    surah(111, "Al-Masad", "المسد", 5, 30, None, &[]),
    surah(112, "Al-Ikhlas", "الإخلاص", 4, 30, None, &[]),
    surah(113, "Al-Falaq", "الفلق", 5, 30, None, &[]),
    surah(114, "An-Nas", "الناس", 6, 30, None, &[]),
];
