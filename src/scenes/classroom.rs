use std::collections::hash_map::RandomState;
use std::f32::consts::{FRAC_PI_2, PI};
use std::hash::{BuildHasher, Hash, Hasher};

use glam::{Quat, Vec3};

use crate::animation::AnimationDriver;
use crate::config::LayoutConfig;
use crate::types::{PointLight, Prop, Scene};

const ROOM_WIDTH: f32 = 12.0;
const ROOM_HEIGHT: f32 = 4.0;
const ROOM_LENGTH: f32 = 15.0;
const SHELL_OPACITY: f32 = 0.3;
const AMBIENT: f32 = 0.3;

const WALL_COLOR: [f32; 3] = [0.25, 0.25, 0.25];
const FLOOR_COLOR: [f32; 3] = [0.19, 0.19, 0.19];
const GRID_COLOR: [f32; 3] = [0.5, 0.5, 0.5];
const DESK_COLOR: [f32; 3] = [0.5, 0.5, 0.5];
const DARK_PLASTIC: [f32; 3] = [0.2, 0.2, 0.2];
const CHAIR_COLOR: [f32; 3] = [0.2, 0.29, 0.37];
const STUDENT_COLOR: [f32; 3] = [0.17, 0.24, 0.31];
const SKIN_COLOR: [f32; 3] = [0.91, 0.75, 0.67];
const LAPTOP_COLOR: [f32; 3] = [0.58, 0.65, 0.65];
const RACK_COLOR: [f32; 3] = [0.17, 0.24, 0.31];
const FRAME_COLOR: [f32; 3] = [0.02, 0.02, 0.02];
/// Stand-in for the terminal texture on every lit panel.
const TERMINAL_GLOW: [f32; 3] = [0.08, 0.3, 0.15];
const LED_COLOR: [f32; 3] = [1.0, 0.1, 0.1];

/// Build the full classroom and the animation driver holding the
/// professor's pacing update.
pub fn build_classroom(config: &LayoutConfig) -> (Scene, AnimationDriver) {
    let mut props = Vec::new();
    let mut lights = Vec::new();
    let mut driver = AnimationDriver::new();

    add_room(&mut props);
    add_ceiling_lights(&mut props, &mut lights);

    for row in 0..config.desk_rows {
        for col in 0..config.desk_cols {
            let x = config.column_x(col);
            let z = config.row_z(row);
            add_desk(&mut props, x, z);
            add_chair(&mut props, x, z + 1.0);
            add_student(&mut props, x, z + 0.8);
        }
    }

    // Side wall screens face the room center; the front wall carries the
    // larger presentation screen.
    add_screen(&mut props, Vec3::new(-5.9, 1.5, -5.0), FRAC_PI_2, 3.0, 1.8);
    add_screen(&mut props, Vec3::new(5.9, 1.5, -5.0), -FRAC_PI_2, 3.0, 1.8);
    add_screen(&mut props, Vec3::new(0.0, 1.5, -7.4), 0.0, 4.0, 2.4);

    add_server_rack(&mut props, -5.9, -2.0);
    add_server_rack(&mut props, 5.9, -2.0);

    add_professor(&mut props, &mut driver, Vec3::new(-3.0, 0.0, -6.0));

    log::info!(
        "classroom built: {} props, {} lights, {} desks",
        props.len(),
        lights.len(),
        config.desk_rows * config.desk_cols
    );

    (
        Scene {
            props,
            lights,
            ambient: AMBIENT,
        },
        driver,
    )
}

/// Floor slab, the floor grid, and the translucent shell (walls + ceiling).
fn add_room(props: &mut Vec<Prop>) {
    props.push(Prop::cuboid(
        Vec3::new(0.0, -0.05, 0.0),
        Vec3::new(ROOM_WIDTH, 0.1, ROOM_LENGTH),
        FLOOR_COLOR,
    ));

    // 12x12 floor grid, one thin slab per line.
    for i in 0..=12 {
        let offset = -6.0 + i as f32;
        props.push(Prop::cuboid(
            Vec3::new(0.0, 0.01, offset),
            Vec3::new(ROOM_WIDTH, 0.01, 0.02),
            GRID_COLOR,
        ));
        props.push(Prop::cuboid(
            Vec3::new(offset, 0.01, 0.0),
            Vec3::new(0.02, 0.01, ROOM_WIDTH),
            GRID_COLOR,
        ));
    }

    let half_w = ROOM_WIDTH / 2.0;
    let half_l = ROOM_LENGTH / 2.0;
    let mid_y = ROOM_HEIGHT / 2.0;
    let shell = [
        (
            Vec3::new(-half_w, mid_y, 0.0),
            Vec3::new(0.05, ROOM_HEIGHT, ROOM_LENGTH),
        ),
        (
            Vec3::new(half_w, mid_y, 0.0),
            Vec3::new(0.05, ROOM_HEIGHT, ROOM_LENGTH),
        ),
        (
            Vec3::new(0.0, mid_y, -half_l),
            Vec3::new(ROOM_WIDTH, ROOM_HEIGHT, 0.05),
        ),
        (
            Vec3::new(0.0, mid_y, half_l),
            Vec3::new(ROOM_WIDTH, ROOM_HEIGHT, 0.05),
        ),
        (
            Vec3::new(0.0, ROOM_HEIGHT, 0.0),
            Vec3::new(ROOM_WIDTH, 0.05, ROOM_LENGTH),
        ),
    ];
    for (position, size) in shell {
        props.push(Prop::cuboid(position, size, WALL_COLOR).with_opacity(SHELL_OPACITY));
    }
}

fn add_ceiling_lights(props: &mut Vec<Prop>, lights: &mut Vec<PointLight>) {
    const POSITIONS: [(f32, f32); 6] = [
        (-3.0, -2.0),
        (0.0, -2.0),
        (3.0, -2.0),
        (-3.0, -5.0),
        (0.0, -5.0),
        (3.0, -5.0),
    ];

    for (x, z) in POSITIONS {
        props.push(
            Prop::cuboid(
                Vec3::new(x, 3.9, z),
                Vec3::new(0.4, 0.1, 0.4),
                [0.8, 0.8, 0.8],
            )
            .with_emissive(0.2),
        );
        lights.push(PointLight {
            position: Vec3::new(x, 3.8, z),
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
            range: 10.0,
        });
    }
}

fn add_desk(props: &mut Vec<Prop>, x: f32, z: f32) {
    props.push(Prop::cuboid(
        Vec3::new(x, 0.5, z),
        Vec3::new(1.5, 0.1, 0.8),
        DESK_COLOR,
    ));
    props.push(Prop::cuboid(
        Vec3::new(x, 1.0, z),
        Vec3::new(0.6, 0.4, 0.05),
        FRAME_COLOR,
    ));
    props.push(Prop::cuboid(
        Vec3::new(x, 0.55, z + 0.2),
        Vec3::new(0.8, 0.05, 0.3),
        DARK_PLASTIC,
    ));
    // Key plate lying flat on the keyboard.
    props.push(Prop::cuboid(
        Vec3::new(x, 0.53, z + 0.2),
        Vec3::new(0.75, 0.01, 0.25),
        [0.27, 0.27, 0.27],
    ));
    // Monitor panel, just proud of the bezel.
    props.push(
        Prop::cuboid(
            Vec3::new(x, 1.0, z + 0.03),
            Vec3::new(0.55, 0.35, 0.01),
            TERMINAL_GLOW,
        )
        .with_emissive(0.5),
    );
}

fn add_chair(props: &mut Vec<Prop>, x: f32, z: f32) {
    props.push(Prop::cuboid(
        Vec3::new(x, 0.35, z),
        Vec3::new(0.5, 0.1, 0.5),
        CHAIR_COLOR,
    ));
    props.push(
        Prop::cuboid(
            Vec3::new(x, 0.65, z + 0.2),
            Vec3::new(0.5, 0.6, 0.1),
            CHAIR_COLOR,
        )
        .with_rotation(Quat::from_rotation_x(PI * 0.1)),
    );
    for i in [-1.0f32, 1.0] {
        for j in [-1.0f32, 1.0] {
            props.push(Prop::cuboid(
                Vec3::new(x + i * 0.2, 0.15, z + j * 0.2),
                Vec3::new(0.05, 0.3, 0.05),
                CHAIR_COLOR,
            ));
        }
    }
}

fn add_student(props: &mut Vec<Prop>, x: f32, z: f32) {
    props.push(Prop::cuboid(
        Vec3::new(x, 0.8, z),
        Vec3::new(0.4, 0.6, 0.3),
        STUDENT_COLOR,
    ));
    props.push(Prop::sphere(Vec3::new(x, 1.3, z), 0.15, SKIN_COLOR));

    for (side, tilt) in [(-1.0f32, -0.3f32), (1.0, 0.3)] {
        props.push(
            Prop::cuboid(
                Vec3::new(x + side * 0.25, 0.9, z),
                Vec3::new(0.1, 0.3, 0.1),
                STUDENT_COLOR,
            )
            .with_rotation(Quat::from_rotation_z(tilt)),
        );
    }

    props.push(Prop::cuboid(
        Vec3::new(x, 0.6, z - 0.1),
        Vec3::new(0.3, 0.02, 0.2),
        LAPTOP_COLOR,
    ));
    props.push(
        Prop::cuboid(
            Vec3::new(x, 0.7, z - 0.2),
            Vec3::new(0.3, 0.2, 0.01),
            LAPTOP_COLOR,
        )
        .with_rotation(Quat::from_rotation_x(-0.3)),
    );
}

/// Frame plus an emissive panel offset toward the room.
fn add_screen(props: &mut Vec<Prop>, position: Vec3, yaw: f32, width: f32, height: f32) {
    let rotation = Quat::from_rotation_y(yaw);
    props.push(
        Prop::cuboid(position, Vec3::new(width, height, 0.1), FRAME_COLOR).with_rotation(rotation),
    );

    let inward = Vec3::new(yaw.sin(), 0.0, yaw.cos()) * 0.06;
    props.push(
        Prop::cuboid(
            position + inward,
            Vec3::new(width - 0.1, height - 0.1, 0.01),
            TERMINAL_GLOW,
        )
        .with_rotation(rotation)
        .with_emissive(0.5),
    );
}

fn add_server_rack(props: &mut Vec<Prop>, x: f32, z: f32) {
    props.push(Prop::cuboid(
        Vec3::new(x, 1.0, z),
        Vec3::new(0.8, 2.0, 0.6),
        RACK_COLOR,
    ));

    // Status LEDs down the front edge, brightness varied per LED.
    let hasher_builder = RandomState::new();
    let led_x = x - x.signum() * 0.3;
    for i in 0..5u32 {
        let mut hasher = hasher_builder.build_hasher();
        i.hash(&mut hasher);
        let intensity = (hasher.finish() % 100) as f32 / 100.0;

        props.push(
            Prop::cuboid(
                Vec3::new(led_x, 0.5 + i as f32 * 0.3, z + 0.31),
                Vec3::splat(0.05),
                LED_COLOR,
            )
            .with_emissive(intensity),
        );
    }
}

/// Professor avatar. Registers the pacing update with the driver; every
/// transform is recomputed from absolute time, so the pose at a given
/// instant never depends on frame history.
fn add_professor(props: &mut Vec<Prop>, driver: &mut AnimationDriver, base: Vec3) {
    let body_local = Vec3::new(0.0, 1.0, 0.0);
    let head_local = Vec3::new(0.0, 1.6, 0.0);
    let left_arm_local = Vec3::new(-0.31, 1.2, 0.0);
    let right_arm_local = Vec3::new(0.31, 1.2, 0.0);

    let first = props.len();
    props.push(Prop::cuboid(
        base + body_local,
        Vec3::new(0.5, 0.8, 0.3),
        CHAIR_COLOR,
    ));
    props.push(Prop::sphere(base + head_local, 0.2, SKIN_COLOR));
    for local in [left_arm_local, right_arm_local] {
        props.push(Prop::cuboid(
            base + local,
            Vec3::new(0.12, 0.4, 0.12),
            CHAIR_COLOR,
        ));
    }

    driver.register(Box::new(move |time, props| {
        let pace = (time * 0.5).sin() * 3.0;
        let bob = (time * 4.0).sin() * 0.05;
        let group = base + Vec3::new(pace, bob, 0.0);
        let turn = Quat::from_rotation_y(time.sin() * 0.1);
        let swing = (time * 2.0).sin() * 0.3;

        let parts = [
            (first, body_local, Quat::IDENTITY),
            (first + 1, head_local, Quat::IDENTITY),
            (first + 2, left_arm_local, Quat::from_rotation_z(swing)),
            (first + 3, right_arm_local, Quat::from_rotation_z(-swing)),
        ];
        for (index, local, limb) in parts {
            props[index].position = group + turn * local;
            props[index].rotation = turn * limb;
        }
    }));
}
