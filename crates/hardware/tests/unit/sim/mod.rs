/// Pause generator patterns.
pub mod pause;



/// Read/write scenarios across the stimulus matrix.
pub mod scenarios;
