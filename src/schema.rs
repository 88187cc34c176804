/// Import columns, in the order the question-bank importer reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Title,
    JenisSoal,
    Pertanyaan,
    OpsiA,
    OpsiB,
    OpsiC,
    OpsiD,
    JawabanBenar,
    Skor,
    DifficultyLevel,
    IsPublic,
    KategoriTesId,
    Equation,
    SkalaMin,
    SkalaMaks,
    SkalaLabelMin,
    SkalaLabelMaks,
}

impl Column {
    pub const ALL: [Column; 17] = [
        Column::Title,
        Column::JenisSoal,
        Column::Pertanyaan,
        Column::OpsiA,
        Column::OpsiB,
        Column::OpsiC,
        Column::OpsiD,
        Column::JawabanBenar,
        Column::Skor,
        Column::DifficultyLevel,
        Column::IsPublic,
        Column::KategoriTesId,
        Column::Equation,
        Column::SkalaMin,
        Column::SkalaMaks,
        Column::SkalaLabelMin,
        Column::SkalaLabelMaks,
    ];

    pub const OPTIONS: [Column; 4] = [Column::OpsiA, Column::OpsiB, Column::OpsiC, Column::OpsiD];

    pub const SCALE: [Column; 4] = [
        Column::SkalaMin,
        Column::SkalaMaks,
        Column::SkalaLabelMin,
        Column::SkalaLabelMaks,
    ];

    /// Header text written in row 1.
    pub fn name(self) -> &'static str {
        match self {
            Column::Title => "title",
            Column::JenisSoal => "jenis_soal",
            Column::Pertanyaan => "pertanyaan",
            Column::OpsiA => "opsi_a",
            Column::OpsiB => "opsi_b",
            Column::OpsiC => "opsi_c",
            Column::OpsiD => "opsi_d",
            Column::JawabanBenar => "jawaban_benar",
            Column::Skor => "skor",
            Column::DifficultyLevel => "difficulty_level",
            Column::IsPublic => "is_public",
            Column::KategoriTesId => "kategori_tes_id",
            Column::Equation => "equation",
            Column::SkalaMin => "skala_min",
            Column::SkalaMaks => "skala_maks",
            Column::SkalaLabelMin => "skala_label_min",
            Column::SkalaLabelMaks => "skala_label_maks",
        }
    }

    /// Column width in Excel character units.
    pub fn width(self) -> f64 {
        match self {
            Column::Title => 35.0,
            Column::JenisSoal => 20.0,
            Column::Pertanyaan => 50.0,
            Column::OpsiA | Column::OpsiB | Column::OpsiC | Column::OpsiD => 25.0,
            Column::JawabanBenar => 20.0,
            Column::Skor => 10.0,
            Column::DifficultyLevel => 18.0,
            Column::IsPublic => 12.0,
            Column::KategoriTesId => 18.0,
            Column::Equation => 15.0,
            Column::SkalaMin | Column::SkalaMaks => 12.0,
            Column::SkalaLabelMin | Column::SkalaLabelMaks => 22.0,
        }
    }

    /// 1-based position, as used for cell addresses.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    PilihanGanda,
    MultiChoice,
    Esai,
    Skala,
}

impl QuestionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::PilihanGanda => "pilihan_ganda",
            QuestionKind::MultiChoice => "multi_choice",
            QuestionKind::Esai => "esai",
            QuestionKind::Skala => "skala",
        }
    }

    pub fn uses_options(self) -> bool {
        matches!(self, QuestionKind::PilihanGanda | QuestionKind::MultiChoice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Blank,
    Text(&'static str),
    Number(f64),
}

impl CellValue {
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Blank)
    }
}

fn text(value: Option<&'static str>) -> CellValue {
    value.map_or(CellValue::Blank, CellValue::Text)
}

fn number(value: Option<u32>) -> CellValue {
    value.map_or(CellValue::Blank, |n| CellValue::Number(f64::from(n)))
}

/// Scale range of a `skala` question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub min: u32,
    pub max: u32,
    pub label_min: &'static str,
    pub label_max: &'static str,
}

/// One illustrative row of the template.
///
/// Fields are keyed by column rather than position; [`ExampleRow::values`]
/// lays them out in [`Column::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleRow {
    pub title: &'static str,
    pub kind: QuestionKind,
    pub question: &'static str,
    pub options: Option<[&'static str; 4]>,
    pub answer: &'static str,
    pub score: u32,
    pub difficulty: Difficulty,
    pub is_public: bool,
    pub category_id: Option<u32>,
    pub equation: Option<&'static str>,
    pub scale: Option<Scale>,
}

impl ExampleRow {
    pub fn value(&self, column: Column) -> CellValue {
        let option = |i: usize| text(self.options.map(|o| o[i]));
        match column {
            Column::Title => CellValue::Text(self.title),
            Column::JenisSoal => CellValue::Text(self.kind.as_str()),
            Column::Pertanyaan => CellValue::Text(self.question),
            Column::OpsiA => option(0),
            Column::OpsiB => option(1),
            Column::OpsiC => option(2),
            Column::OpsiD => option(3),
            Column::JawabanBenar => CellValue::Text(self.answer),
            Column::Skor => CellValue::Number(f64::from(self.score)),
            Column::DifficultyLevel => CellValue::Text(self.difficulty.as_str()),
            // The importer reads the literal strings "true"/"false".
            Column::IsPublic => CellValue::Text(if self.is_public { "true" } else { "false" }),
            Column::KategoriTesId => number(self.category_id),
            Column::Equation => text(self.equation),
            Column::SkalaMin => number(self.scale.map(|s| s.min)),
            Column::SkalaMaks => number(self.scale.map(|s| s.max)),
            Column::SkalaLabelMin => text(self.scale.map(|s| s.label_min)),
            Column::SkalaLabelMaks => text(self.scale.map(|s| s.label_max)),
        }
    }

    pub fn values(&self) -> Vec<CellValue> {
        Column::ALL.iter().map(|c| self.value(*c)).collect()
    }
}

pub fn header() -> Vec<&'static str> {
    Column::ALL.iter().map(|c| c.name()).collect()
}

/// The four example rows, one per question kind.
pub fn example_rows() -> Vec<ExampleRow> {
    vec![
        ExampleRow {
            title: "Soal Pilihan Ganda - Geografi Indonesia",
            kind: QuestionKind::PilihanGanda,
            question: "Apa ibu kota Indonesia?",
            options: Some(["Jakarta", "Bandung", "Surabaya", "Medan"]),
            answer: "a",
            score: 10,
            difficulty: Difficulty::Easy,
            is_public: true,
            category_id: Some(1),
            equation: None,
            scale: None,
        },
        ExampleRow {
            title: "Soal Multi Choice - Bahasa Pemrograman",
            kind: QuestionKind::MultiChoice,
            question: "Pilih bahasa pemrograman berikut (pilih semua yang benar)",
            options: Some(["Python", "Java", "HTML", "CSS"]),
            answer: "a,b",
            score: 15,
            difficulty: Difficulty::Medium,
            is_public: true,
            category_id: Some(1),
            equation: None,
            scale: None,
        },
        ExampleRow {
            title: "Soal Esai - Teori Programming",
            kind: QuestionKind::Esai,
            question: "Jelaskan perbedaan antara OOP dan Procedural Programming",
            options: None,
            answer: "Jawaban bervariasi",
            score: 20,
            difficulty: Difficulty::Hard,
            is_public: false,
            category_id: Some(2),
            equation: None,
            scale: None,
        },
        ExampleRow {
            title: "Soal Skala - Survey Kepuasan",
            kind: QuestionKind::Skala,
            question: "Seberapa puas Anda dengan layanan kami?",
            options: None,
            answer: "5",
            score: 5,
            difficulty: Difficulty::Easy,
            is_public: true,
            category_id: None,
            equation: None,
            scale: Some(Scale {
                min: 1,
                max: 5,
                label_min: "Sangat Tidak Puas",
                label_max: "Sangat Puas",
            }),
        },
    ]
}
