use crate::CameraConfig;
use glam::{Mat4, Quat, Vec3};
use vernissage_common::Pose;
use vernissage_input::{InputEvent, InputIntent};

/// First-person walk camera for a single viewer session.
///
/// Input events are only recorded; the pose advances in [`on_frame`], so a
/// frame never observes a half-applied look or move.
///
/// [`on_frame`]: CameraController::on_frame
pub struct CameraController {
    config: CameraConfig,
    pose: Pose,
    intent: InputIntent,
    /// Aspect ratio of the current viewport (width / height).
    pub aspect: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl CameraController {
    pub fn new(config: CameraConfig) -> Self {
        let pose = Pose::new(
            Vec3::new(
                config.start_position.x,
                config.eye_height,
                config.start_position.z,
            ),
            config.start_yaw,
            0.0,
        );
        let mut controller = Self {
            config,
            pose,
            intent: InputIntent::new(),
            aspect: 16.0 / 9.0,
        };
        controller.pose.position = controller.config.bounds.clamp(controller.pose.position);
        controller
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Current pose as of the last frame.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn intent(&self) -> &InputIntent {
        &self.intent
    }

    /// Record a raw input event. Never mutates the pose.
    pub fn on_input_event(&mut self, event: InputEvent) {
        self.intent.record(event);
    }

    /// Forget held keys and any drag in progress.
    pub fn release_all(&mut self) {
        self.intent.clear();
    }

    /// Advance one rendered frame by `delta` seconds and return the new pose.
    ///
    /// Non-finite or negative deltas count as zero.
    pub fn on_frame(&mut self, delta: f32) -> Pose {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };

        self.apply_look();

        let dir = self.intent.movement_axes(&self.config.bindings);
        if dir != Vec3::ZERO {
            let world_dir = Quat::from_rotation_y(self.pose.yaw) * dir.normalize();
            let next = self.pose.position + world_dir * self.config.speed * delta;
            self.pose.position = self.config.bounds.clamp(next);
        }
        self.pose.position.y = self.config.eye_height;

        tracing::trace!(
            x = self.pose.position.x,
            z = self.pose.position.z,
            yaw = self.pose.yaw,
            pitch = self.pose.pitch,
            "camera frame"
        );
        self.pose
    }

    fn apply_look(&mut self) {
        let look = self.intent.take_look_delta();
        if look.x == 0.0 && look.y == 0.0 {
            return;
        }
        let s = self.config.look_sensitivity;
        let limit = self.config.pitch_limit;
        self.pose.yaw -= look.x * s;
        self.pose.pitch = (self.pose.pitch - look.y * s).clamp(-limit, limit);
    }

    pub fn view_matrix(&self) -> Mat4 {
        let p = self.pose.position;
        Mat4::look_at_rh(p, p + self.pose.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.config.fov_degrees.to_radians(),
            self.aspect,
            self.config.near,
            self.config.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use std::f32::consts::FRAC_PI_4;
    use vernissage_input::KeyCode;

    const EPS: f32 = 1e-5;

    fn drag(cam: &mut CameraController, dx: f32, dy: f32) {
        cam.on_input_event(InputEvent::PointerDown {
            position: Vec2::new(200.0, 200.0),
        });
        cam.on_input_event(InputEvent::PointerMove {
            position: Vec2::new(200.0 + dx, 200.0 + dy),
        });
        cam.on_input_event(InputEvent::PointerUp);
    }

    #[test]
    fn default_camera() {
        let cam = CameraController::default();
        assert_eq!(cam.pose().position, Vec3::new(0.0, 1.7, 6.0));
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn forward_one_second() {
        let mut cam = CameraController::default();
        cam.on_input_event(InputEvent::KeyDown(KeyCode::KeyW));
        let pose = cam.on_frame(1.0);
        assert!((pose.position.z - 2.0).abs() < EPS);
        assert!(pose.position.x.abs() < EPS);
        assert_eq!(pose.position.y, 1.7);
    }

    #[test]
    fn events_do_not_move_until_frame() {
        let mut cam = CameraController::default();
        cam.on_input_event(InputEvent::KeyDown(KeyCode::KeyW));
        drag(&mut cam, 100.0, 0.0);
        assert_eq!(cam.pose(), CameraController::default().pose());
    }

    #[test]
    fn drag_turns_yaw() {
        let mut cam = CameraController::default();
        drag(&mut cam, 100.0, 0.0);
        let pose = cam.on_frame(0.016);
        assert!((pose.yaw - -0.3).abs() < EPS);
        assert_eq!(pose.pitch, 0.0);
    }

    #[test]
    fn pitch_is_clamped_yaw_is_not() {
        let mut cam = CameraController::default();
        for _ in 0..50 {
            drag(&mut cam, 1000.0, -1000.0);
            let pose = cam.on_frame(0.016);
            assert!(pose.pitch <= FRAC_PI_4 + EPS);
            assert!(pose.pitch >= -FRAC_PI_4 - EPS);
        }
        let pose = cam.pose();
        assert!((pose.pitch - FRAC_PI_4).abs() < EPS);
        assert!((pose.yaw - -150.0).abs() < 1e-2);

        drag(&mut cam, 0.0, 1_000_000.0);
        assert!((cam.on_frame(0.0).pitch + FRAC_PI_4).abs() < EPS);
    }

    #[test]
    fn opposing_keys_do_not_move() {
        let mut cam = CameraController::default();
        let start = cam.pose().position;
        cam.on_input_event(InputEvent::KeyDown(KeyCode::KeyW));
        cam.on_input_event(InputEvent::KeyDown(KeyCode::ArrowDown));
        for _ in 0..10 {
            cam.on_frame(0.5);
        }
        assert!((cam.pose().position - start).length() < EPS);
    }

    #[test]
    fn position_stays_in_room() {
        let mut cam = CameraController::default();
        cam.on_input_event(InputEvent::KeyDown(KeyCode::KeyW));
        cam.on_input_event(InputEvent::KeyDown(KeyCode::KeyA));
        for i in 0..200 {
            if i % 20 == 0 {
                drag(&mut cam, 157.0, 33.0);
            }
            let pose = cam.on_frame(0.25);
            assert!((-6.5..=6.5).contains(&pose.position.x));
            assert!((-8.0..=7.0).contains(&pose.position.z));
            assert_eq!(pose.position.y, 1.7);
        }
    }

    #[test]
    fn long_walk_stops_at_back_wall() {
        let mut cam = CameraController::default();
        cam.on_input_event(InputEvent::KeyDown(KeyCode::ArrowUp));
        let pose = cam.on_frame(100.0);
        assert_eq!(pose.position.z, -8.0);
    }

    #[test]
    fn looking_up_does_not_lift_movement() {
        let mut cam = CameraController::default();
        drag(&mut cam, 0.0, -200.0);
        cam.on_input_event(InputEvent::KeyDown(KeyCode::KeyW));
        let pose = cam.on_frame(0.5);
        assert!(pose.pitch > 0.0);
        assert_eq!(pose.position.y, 1.7);
        assert!((pose.position.z - 4.0).abs() < EPS);
    }

    #[test]
    fn diagonal_is_normalized() {
        let mut cam = CameraController::default();
        cam.on_input_event(InputEvent::KeyDown(KeyCode::KeyW));
        cam.on_input_event(InputEvent::KeyDown(KeyCode::KeyD));
        let start = cam.pose().position;
        let pose = cam.on_frame(0.25);
        assert!(((pose.position - start).length() - 1.0).abs() < EPS);
    }

    #[test]
    fn strafe_follows_yaw() {
        let mut cam = CameraController::default();
        // Quarter turn to the left: forward becomes -X.
        cam.on_input_event(InputEvent::PointerDown {
            position: Vec2::ZERO,
        });
        cam.on_input_event(InputEvent::PointerMove {
            position: Vec2::new(-std::f32::consts::FRAC_PI_2 / 0.003, 0.0),
        });
        cam.on_input_event(InputEvent::KeyDown(KeyCode::KeyW));
        let pose = cam.on_frame(0.5);
        assert!((pose.position.x - -2.0).abs() < 1e-3);
        assert!((pose.position.z - 6.0).abs() < 1e-3);
    }

    #[test]
    fn bad_delta_is_ignored() {
        let mut cam = CameraController::default();
        cam.on_input_event(InputEvent::KeyDown(KeyCode::KeyW));
        let start = cam.pose();
        assert_eq!(cam.on_frame(f32::NAN), start);
        assert_eq!(cam.on_frame(-1.0), start);
        assert_eq!(cam.on_frame(f32::INFINITY), start);
    }

    #[test]
    fn release_all_stops_motion() {
        let mut cam = CameraController::default();
        cam.on_input_event(InputEvent::KeyDown(KeyCode::KeyS));
        cam.release_all();
        let start = cam.pose();
        assert_eq!(cam.on_frame(1.0), start);
    }

    #[test]
    fn custom_config_speed() {
        let config = CameraConfig {
            speed: 1.0,
            ..CameraConfig::default()
        };
        let mut cam = CameraController::new(config);
        cam.on_input_event(InputEvent::KeyDown(KeyCode::KeyW));
        assert!((cam.on_frame(1.0).position.z - 5.0).abs() < EPS);
    }
}
