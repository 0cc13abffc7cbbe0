//! Training Corpus
//!
//! The ten labelled rows the forest is fit on. Embedded, immutable, never
//! loaded from storage. Row order matters: category indices are assigned on
//! first sight while scanning rows 0..9.

use ndarray::Array2;

use super::encoding::CategoryEncodings;
use super::label::DisorderLabel;
use crate::logic::error::HealthResult;
use crate::logic::features::{AttributeRecord, Level, YesNo, FEATURE_COUNT, LABEL_COLUMN};

/// One labelled sample, categoricals kept as observed strings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorpusRow {
    pub sleep_hours: u8,
    pub exercise_hours: f32,
    pub screen_time: f32,
    pub stress_level: &'static str,
    pub caffeine_intake: u32,
    pub alcohol_consumption: &'static str,
    pub work_hours: f32,
    pub water_intake: f32,
    pub junk_food_frequency: &'static str,
    pub smoking: &'static str,
    pub disorder: &'static str,
}

macro_rules! row {
    ($sleep:expr, $ex:expr, $screen:expr, $stress:expr, $caf:expr, $alc:expr,
     $work:expr, $water:expr, $junk:expr, $smoke:expr, $disorder:expr) => {
        CorpusRow {
            sleep_hours: $sleep,
            exercise_hours: $ex,
            screen_time: $screen,
            stress_level: $stress,
            caffeine_intake: $caf,
            alcohol_consumption: $alc,
            work_hours: $work,
            water_intake: $water,
            junk_food_frequency: $junk,
            smoking: $smoke,
            disorder: $disorder,
        }
    };
}

pub const TRAINING_ROWS: [CorpusRow; 10] = [
    row!(6, 0.0, 8.0, "High", 3, "Yes", 10.0, 1.0, "High", "Yes", "Insomnia"),
    row!(8, 1.0, 4.0, "Low", 1, "No", 7.0, 3.0, "Low", "No", "Healthy"),
    row!(5, 0.0, 9.0, "High", 4, "Yes", 11.0, 2.0, "High", "Yes", "Insomnia"),
    row!(4, 0.0, 10.0, "High", 5, "Yes", 12.0, 1.0, "High", "Yes", "Insomnia"),
    row!(9, 2.0, 3.0, "Low", 0, "No", 6.0, 4.0, "Low", "No", "Healthy"),
    row!(7, 1.0, 5.0, "Medium", 2, "No", 8.0, 3.0, "Medium", "No", "Mild Sleep Apnea"),
    row!(3, 0.0, 12.0, "High", 6, "Yes", 13.0, 1.0, "High", "Yes", "Severe Sleep Apnea"),
    row!(8, 3.0, 2.0, "Low", 0, "No", 5.0, 5.0, "Low", "No", "Healthy"),
    row!(6, 1.0, 7.0, "Medium", 2, "No", 9.0, 2.0, "Medium", "No", "Mild Sleep Apnea"),
    row!(5, 0.0, 8.0, "High", 4, "Yes", 11.0, 1.0, "High", "Yes", "Insomnia"),
];

impl CorpusRow {
    /// Observed string for a categorical column (label column included)
    pub fn categorical(&self, field: &str) -> Option<&'static str> {
        match field {
            "stress_level" => Some(self.stress_level),
            "alcohol_consumption" => Some(self.alcohol_consumption),
            "junk_food_frequency" => Some(self.junk_food_frequency),
            "smoking" => Some(self.smoking),
            LABEL_COLUMN => Some(self.disorder),
            _ => None,
        }
    }

    pub fn to_record(&self) -> HealthResult<AttributeRecord> {
        Ok(AttributeRecord {
            sleep_hours: self.sleep_hours,
            exercise_hours: self.exercise_hours,
            screen_time: self.screen_time,
            stress_level: Level::parse("stress_level", self.stress_level)?,
            caffeine_intake: self.caffeine_intake,
            alcohol_consumption: YesNo::parse("alcohol_consumption", self.alcohol_consumption)?,
            work_hours: self.work_hours,
            water_intake: self.water_intake,
            junk_food_frequency: Level::parse("junk_food_frequency", self.junk_food_frequency)?,
            smoking: YesNo::parse("smoking", self.smoking)?,
        })
    }

    pub fn label(&self) -> HealthResult<DisorderLabel> {
        DisorderLabel::parse(self.disorder)
    }
}

/// The fixed dataset
#[derive(Debug, Clone, Copy)]
pub struct TrainingCorpus {
    rows: &'static [CorpusRow],
}

impl Default for TrainingCorpus {
    fn default() -> Self {
        Self::embedded()
    }
}

impl TrainingCorpus {
    pub fn embedded() -> Self {
        Self { rows: &TRAINING_ROWS }
    }

    pub fn rows(&self) -> &'static [CorpusRow] {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column values in row order
    pub fn column(&self, field: &str) -> Vec<&'static str> {
        self.rows.iter().filter_map(|r| r.categorical(field)).collect()
    }

    /// Encode into an (n × FEATURE_COUNT) matrix and a class-index vector
    pub fn to_matrix(
        &self,
        encodings: &CategoryEncodings,
    ) -> HealthResult<(Array2<f32>, Vec<usize>)> {
        let mut x = Array2::<f32>::zeros((self.rows.len(), FEATURE_COUNT));
        let mut y = Vec::with_capacity(self.rows.len());

        for (i, row) in self.rows.iter().enumerate() {
            let vector = encodings.encode_record(&row.to_record()?)?;
            for (j, value) in vector.values.iter().enumerate() {
                x[[i, j]] = *value;
            }
            y.push(encodings.disorder.encode(row.disorder)?);
        }

        Ok((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_shape() {
        let corpus = TrainingCorpus::embedded();
        assert_eq!(corpus.len(), 10);
        assert_eq!(corpus.column("disorder").len(), 10);
        assert!(corpus.column("sleep_hours").is_empty());
    }

    #[test]
    fn test_rows_parse_into_records() {
        for row in TrainingCorpus::embedded().rows() {
            let record = row.to_record().unwrap();
            assert!(record.validate().is_ok());
            assert!(row.label().is_ok());
        }
    }

    #[test]
    fn test_to_matrix() {
        let corpus = TrainingCorpus::embedded();
        let encodings = CategoryEncodings::from_corpus(&corpus).unwrap();
        let (x, y) = corpus.to_matrix(&encodings).unwrap();

        assert_eq!(x.dim(), (10, FEATURE_COUNT));
        assert_eq!(y, vec![0, 1, 0, 0, 1, 2, 3, 1, 2, 0]);

        // Row 6: Severe Sleep Apnea, stress High → 0, smoking Yes → 0
        assert_eq!(x[[6, 0]], 3.0);
        assert_eq!(x[[6, 2]], 12.0);
        assert_eq!(x[[6, 3]], 0.0);
        assert_eq!(x[[6, 9]], 0.0);
        // Row 1: stress Low → 1, junk Low → 1, smoking No → 1
        assert_eq!(x[[1, 3]], 1.0);
        assert_eq!(x[[1, 8]], 1.0);
        assert_eq!(x[[1, 9]], 1.0);
    }
}
