// Single projectile under gravity with minimal setup
use particle_sim_core::{Particle, Vector3};

fn main() {
    // Launch at 45 degrees, 10 m/s
    let speed = 10.0;
    let direction = Vector3::new(1.0, 1.0, 0.0)
        .normalize()
        .expect("launch direction is nonzero");

    let mut ball = Particle::new(
        Vector3::zeros(),
        direction * speed,
        Vector3::new(0.0, -9.81, 0.0),
        Vector3::new(1.0, 0.066, 0.0),
        0.1,
        0.05,
        0.0,
        "ball",
    );

    let dt = 0.01;
    let mut time = 0.0;
    loop {
        ball.update(dt);
        time += dt;
        if ball.position().y() <= 0.0 {
            break;
        }
    }

    println!("Landed after {:.2}s at x = {:.2}m", time, ball.position().x());
    println!("Analytic range: {:.2}m", speed * speed / 9.81);
}
