use glam::{Mat3, Mat4, Quat, Vec3};

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 3],
    pub _pad: f32,
}

impl CameraUniform {
    pub fn new(view_proj: Mat4, eye: Vec3) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            eye: eye.to_array(),
            _pad: 0.0,
        }
    }
}

/// The two instanced meshes everything in the scene is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Cuboid,
    Sphere,
}

/// One renderable scene node. Unit meshes are centered on the origin and
/// span one unit, so `scale` is the full extent of a cuboid and the
/// diameter of a sphere.
#[derive(Debug, Clone, Copy)]
pub struct Prop {
    pub shape: Shape,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub color: [f32; 3],
    pub emissive: f32,
    pub opacity: f32,
}

impl Prop {
    pub fn cuboid(position: Vec3, size: Vec3, color: [f32; 3]) -> Self {
        Self {
            shape: Shape::Cuboid,
            position,
            rotation: Quat::IDENTITY,
            scale: size,
            color,
            emissive: 0.0,
            opacity: 1.0,
        }
    }

    pub fn sphere(position: Vec3, radius: f32, color: [f32; 3]) -> Self {
        Self {
            shape: Shape::Sphere,
            position,
            rotation: Quat::IDENTITY,
            scale: Vec3::splat(radius * 2.0),
            color,
            emissive: 0.0,
            opacity: 1.0,
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn is_translucent(&self) -> bool {
        self.opacity < 1.0
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    pub fn to_raw(&self) -> InstanceRaw {
        // Normal matrix for model = T*R*S is R * S^-1; translation drops out.
        let normal = Mat3::from_quat(self.rotation)
            * Mat3::from_diagonal(Vec3::ONE / self.scale.max(Vec3::splat(1e-6)));

        InstanceRaw {
            model: self.model_matrix().to_cols_array_2d(),
            normal: [
                normal.x_axis.extend(0.0).to_array(),
                normal.y_axis.extend(0.0).to_array(),
                normal.z_axis.extend(0.0).to_array(),
            ],
            color: [self.color[0], self.color[1], self.color[2], self.opacity],
            emissive: [self.emissive, 0.0, 0.0, 0.0],
        }
    }
}

/// Per-instance data for the instanced draw passes.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 3],
    pub color: [f32; 4],
    pub emissive: [f32; 4],
}

pub const MAX_LIGHTS: usize = 8;

/// A ceiling light. `range` bounds the falloff like the original fixtures.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    pub range: f32,
}

impl PointLight {
    pub fn to_raw(&self) -> LightRaw {
        LightRaw {
            position: self.position.to_array(),
            intensity: self.intensity,
            color: self.color,
            range: self.range,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightRaw {
    pub position: [f32; 3],
    pub intensity: f32,
    pub color: [f32; 3],
    pub range: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub ambient: [f32; 3],
    pub count: u32,
    pub lights: [LightRaw; MAX_LIGHTS],
}

/// The fully built scene: flat prop list plus lighting. Props never change
/// count after construction; animations only rewrite transforms in place.
pub struct Scene {
    pub props: Vec<Prop>,
    pub lights: Vec<PointLight>,
    pub ambient: f32,
}

impl Scene {
    pub fn count_of(&self, shape: Shape) -> usize {
        self.props.iter().filter(|p| p.shape == shape).count()
    }

    pub fn translucent_count(&self) -> usize {
        self.props.iter().filter(|p| p.is_translucent()).count()
    }

    pub fn lights_uniform(&self) -> LightsUniform {
        let mut lights = [LightRaw {
            position: [0.0; 3],
            intensity: 0.0,
            color: [0.0; 3],
            range: 1.0,
        }; MAX_LIGHTS];

        let count = self.lights.len().min(MAX_LIGHTS);
        for (slot, light) in lights.iter_mut().zip(self.lights.iter()) {
            *slot = light.to_raw();
        }

        LightsUniform {
            ambient: [self.ambient; 3],
            count: count as u32,
            lights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuboid_model_matrix_spans_its_size() {
        let prop = Prop::cuboid(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0), [1.0; 3]);
        let m = prop.model_matrix();

        let lo = m.transform_point3(Vec3::splat(-0.5));
        let hi = m.transform_point3(Vec3::splat(0.5));
        assert_eq!(lo, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(hi, Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn sphere_scale_is_diameter() {
        let prop = Prop::sphere(Vec3::ZERO, 0.15, [1.0; 3]);
        assert_eq!(prop.scale, Vec3::splat(0.3));
    }

    #[test]
    fn instance_raw_carries_opacity_in_alpha() {
        let raw = Prop::cuboid(Vec3::ZERO, Vec3::ONE, [0.2, 0.4, 0.6])
            .with_opacity(0.3)
            .to_raw();
        assert_eq!(raw.color, [0.2, 0.4, 0.6, 0.3]);
    }

    #[test]
    fn lights_uniform_caps_at_max() {
        let light = PointLight {
            position: Vec3::ZERO,
            color: [1.0; 3],
            intensity: 1.0,
            range: 10.0,
        };
        let scene = Scene {
            props: Vec::new(),
            lights: vec![light; MAX_LIGHTS + 3],
            ambient: 0.3,
        };
        assert_eq!(scene.lights_uniform().count, MAX_LIGHTS as u32);
    }

    #[test]
    fn rotated_prop_normal_matrix_rotates_normals() {
        let rot = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let raw = Prop::cuboid(Vec3::ZERO, Vec3::ONE, [1.0; 3])
            .with_rotation(rot)
            .to_raw();

        let n = Mat3::from_cols(
            glam::Vec4::from_array(raw.normal[0]).truncate(),
            glam::Vec4::from_array(raw.normal[1]).truncate(),
            glam::Vec4::from_array(raw.normal[2]).truncate(),
        );
        let out = n * Vec3::Z;
        assert!((out - Vec3::X).length() < 1e-5);
    }
}
