//! Periodic read-compute-report loop.
//!
//! One cycle reads a fresh raw sample, compensates temperature and then pressure, and hands the
//! outcome to a [`Sink`]. The loop then waits the configured interval. A [`StopSignal`] is checked
//! before every cycle; a cycle that has started always runs to completion or failure.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal_async::delay::DelayNs;

use crate::bmp280::{Bmp280, Bmp280Result};
use crate::bus::Bus;
use crate::config::{FailurePolicy, SamplerConfig};
use crate::error::Bmp280Error;
use crate::measurement::Measurement;

/// Receives the outcome of every sampling cycle.
///
/// A failed cycle is reported as its error, never as a stale or zeroed [`Measurement`].
pub trait Sink<BusError> {
    fn report(&mut self, outcome: &Bmp280Result<Measurement, BusError>);
}

/// External request to stop sampling, checked between cycles.
pub trait StopSignal {
    fn is_stop_requested(&self) -> bool;
}

impl StopSignal for AtomicBool {
    fn is_stop_requested(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

/// Logs readings and failures over defmt.
#[cfg(feature = "defmt")]
pub struct DefmtSink;

#[cfg(feature = "defmt")]
impl<BusError> Sink<BusError> for DefmtSink {
    fn report(&mut self, outcome: &Bmp280Result<Measurement, BusError>) {
        match outcome {
            Ok(m) => defmt::info!(
                "Temp: {=f32} degC, Pressure: {=f32} hPa",
                m.temperature_celsius(),
                m.pressure_hectopascal()
            ),
            Err(Bmp280Error::Bus(_)) => defmt::warn!("No reading: bus transaction failed"),
            Err(Bmp280Error::DegenerateCalibration(e)) => defmt::error!(
                "Temp: {=f32} degC, no pressure: calibration set is degenerate",
                e.temperature().celsius()
            ),
        }
    }
}

pub struct Sampler<B> {
    device: Bmp280<B>,
    config: SamplerConfig,
}

impl<B> Sampler<B>
where
    B: Bus,
{
    pub fn new(device: Bmp280<B>, config: SamplerConfig) -> Self {
        Self { device, config }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Gives back the driver.
    pub fn into_device(self) -> Bmp280<B> {
        self.device
    }

    /// Runs one cycle without waiting.
    pub async fn sample_once(&mut self) -> Bmp280Result<Measurement, B::Error> {
        self.device.read_measurement().await
    }

    /// Samples until `stop` is raised.
    ///
    /// Every outcome goes to `sink`. After each cycle the loop waits the configured interval on
    /// `delay`. On failure, [`FailurePolicy::Skip`] moves on to the next cycle, while
    /// [`FailurePolicy::Halt`] returns the error right after it has been reported.
    ///
    /// Returns `Ok(())` once a stop has been requested.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// static STOP: AtomicBool = AtomicBool::new(false);
    ///
    /// let device = Bmp280::new_i2c(i2c, SdoPinState::Low, CalibrationSet::REFERENCE);
    /// let mut sampler = Sampler::new(device, SamplerConfig::default());
    /// sampler.run(&mut embassy_time::Delay, &mut DefmtSink, &STOP).await?;
    /// ```
    pub async fn run<D, S, X>(
        &mut self,
        delay: &mut D,
        sink: &mut S,
        stop: &X,
    ) -> Bmp280Result<(), B::Error>
    where
        D: DelayNs,
        S: Sink<B::Error>,
        X: StopSignal + ?Sized,
    {
        while !stop.is_stop_requested() {
            let outcome = self.sample_once().await;
            sink.report(&outcome);

            if let Err(e) = outcome {
                match e {
                    Bmp280Error::Bus(_) => warn!("sampling cycle failed: bus error"),
                    Bmp280Error::DegenerateCalibration(_) => {
                        warn!("sampling cycle failed: degenerate calibration")
                    }
                }

                if self.config.failure_policy == FailurePolicy::Halt {
                    return Err(e);
                }
            }

            match self.config.interval_us() {
                Some(us) => delay.delay_us(us).await,
                None => delay.delay_ms(self.config.interval_ms()).await,
            }
        }

        info!("sampling stopped");
        Ok(())
    }
}
