use std::fmt;

use serde::{Deserialize, Serialize};

use super::StorageError;

/// Which external model a measurement set is scored by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionModel {
    Diabetes,
    Hypertension,
}

impl PredictionModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionModel::Diabetes => "diabetes",
            PredictionModel::Hypertension => "hypertension",
        }
    }
}

impl fmt::Display for PredictionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A measurement set accepted by one prediction model.
pub trait Measurements: Serialize + Send + Sync {
    const MODEL: PredictionModel;

    /// Feature vector in the order the model was trained on.
    fn features(&self) -> Vec<f64>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiabetesInput {
    pub pregnancies: i64,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub diabetes_pedigree: f64,
    pub age: i64,
}

impl Measurements for DiabetesInput {
    const MODEL: PredictionModel = PredictionModel::Diabetes;

    fn features(&self) -> Vec<f64> {
        vec![
            self.pregnancies as f64,
            self.glucose,
            self.blood_pressure,
            self.skin_thickness,
            self.insulin,
            self.bmi,
            self.diabetes_pedigree,
            self.age as f64,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodPressureInput {
    pub age: i64,
    pub systolic_pressure: f64,
    pub diastolic_pressure: f64,
}

impl Measurements for BloodPressureInput {
    const MODEL: PredictionModel = PredictionModel::Hypertension;

    fn features(&self) -> Vec<f64> {
        vec![self.age as f64, self.systolic_pressure, self.diastolic_pressure]
    }
}

/// Request body: the measurements, flat, plus the owning user.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRequest<M> {
    #[serde(flatten)]
    pub measurements: M,
    pub user_id: String,
}

/// What the record store receives. `input` never contains the user id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRecord {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub input: serde_json::Value,
    pub result: String,
}

impl PredictionRecord {
    pub fn new<M: Measurements>(
        request: &PredictionRequest<M>,
        result: &str,
    ) -> Result<Self, StorageError> {
        let input = serde_json::to_value(&request.measurements)
            .map_err(|e| StorageError::Encode(e.to_string()))?;
        Ok(Self {
            user_id: request.user_id.clone(),
            input,
            result: result.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn diabetes_request_parses_flat_body() {
        let body = json!({
            "pregnancies": 1, "glucose": 85, "blood_pressure": 66,
            "skin_thickness": 29, "insulin": 0, "bmi": 26.6,
            "diabetes_pedigree": 0.351, "age": 31, "user_id": "u1"
        });
        let req: PredictionRequest<DiabetesInput> = serde_json::from_value(body).unwrap();
        assert_eq!(req.user_id, "u1");
        assert_eq!(req.measurements.glucose, 85.0);
        assert_eq!(req.measurements.features().len(), 8);
    }

    #[test]
    fn missing_field_is_rejected() {
        let body = json!({ "age": 50, "systolic_pressure": 140.0, "user_id": "u1" });
        assert!(serde_json::from_value::<PredictionRequest<BloodPressureInput>>(body).is_err());
    }

    #[test]
    fn blood_pressure_feature_order() {
        let input = BloodPressureInput {
            age: 50,
            systolic_pressure: 140.0,
            diastolic_pressure: 90.0,
        };
        assert_eq!(input.features(), vec![50.0, 140.0, 90.0]);
    }

    #[test]
    fn record_excludes_user_id_from_input() {
        let request = PredictionRequest {
            measurements: BloodPressureInput {
                age: 50,
                systolic_pressure: 140.0,
                diastolic_pressure: 90.0,
            },
            user_id: "u7".into(),
        };
        let record = PredictionRecord::new(&request, "Hypertension stage 2").unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["userId"], "u7");
        assert_eq!(json["result"], "Hypertension stage 2");
        assert_eq!(json["input"]["age"], 50);
        assert_eq!(json["input"]["systolic_pressure"], 140.0);
        assert!(json["input"].get("user_id").is_none());
    }

    #[test]
    fn model_names() {
        assert_eq!(PredictionModel::Diabetes.to_string(), "diabetes");
        assert_eq!(
            serde_json::to_string(&PredictionModel::Hypertension).unwrap(),
            "\"hypertension\""
        );
    }
}
